//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

/// AWS WAF `DeletePermissionPolicyResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePermissionPolicyOutput {}

impl Shape for DeletePermissionPolicyOutput {
    const SHAPE_NAME: &'static str = "DeletePermissionPolicyResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS WAF `GetPermissionPolicyResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPermissionPolicyOutput {
    #[serde(rename = "Policy", skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

impl Shape for GetPermissionPolicyOutput {
    const SHAPE_NAME: &'static str = "GetPermissionPolicyResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("policy", "Policy", TypeInfo::String),
    ];
}

/// AWS WAF `PutPermissionPolicyResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PutPermissionPolicyOutput {}

impl Shape for PutPermissionPolicyOutput {
    const SHAPE_NAME: &'static str = "PutPermissionPolicyResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

