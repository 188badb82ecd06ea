//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape};
use serde::{Deserialize, Serialize};

/// AWS Elemental MediaConvert `AssociateCertificateResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociateCertificateOutput {}

impl Shape for AssociateCertificateOutput {
    const SHAPE_NAME: &'static str = "AssociateCertificateResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS Elemental MediaConvert `DisassociateCertificateResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisassociateCertificateOutput {}

impl Shape for DisassociateCertificateOutput {
    const SHAPE_NAME: &'static str = "DisassociateCertificateResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

