//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

/// AWS Elemental MediaConvert `AssociateCertificateRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociateCertificateInput {
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl Shape for AssociateCertificateInput {
    const SHAPE_NAME: &'static str = "AssociateCertificateRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `DisassociateCertificateRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisassociateCertificateInput {
    /// HTTP label (URI path).
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl Shape for DisassociateCertificateInput {
    const SHAPE_NAME: &'static str = "DisassociateCertificateRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String).required(),
    ];
}

