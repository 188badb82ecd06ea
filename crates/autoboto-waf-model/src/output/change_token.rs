//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::ChangeTokenStatus;

/// AWS WAF `GetChangeTokenResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetChangeTokenOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for GetChangeTokenOutput {
    const SHAPE_NAME: &'static str = "GetChangeTokenResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetChangeTokenStatusResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetChangeTokenStatusOutput {
    #[serde(rename = "ChangeTokenStatus", skip_serializing_if = "Option::is_none")]
    pub change_token_status: Option<ChangeTokenStatus>,
}

impl Shape for GetChangeTokenStatusOutput {
    const SHAPE_NAME: &'static str = "GetChangeTokenStatusResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "change_token_status",
            "ChangeTokenStatus",
            TypeInfo::Enum("ChangeTokenStatus"),
        ),
    ];
}

