//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

/// AWS WAF `GetChangeTokenRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetChangeTokenInput {}

impl Shape for GetChangeTokenInput {
    const SHAPE_NAME: &'static str = "GetChangeTokenRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS WAF `GetChangeTokenStatusRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetChangeTokenStatusInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for GetChangeTokenStatusInput {
    const SHAPE_NAME: &'static str = "GetChangeTokenStatusRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
    ];
}

