//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

/// AWS WAF `DeletePermissionPolicyRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePermissionPolicyInput {
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl Shape for DeletePermissionPolicyInput {
    const SHAPE_NAME: &'static str = "DeletePermissionPolicyRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("resource_arn", "ResourceArn", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetPermissionPolicyRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPermissionPolicyInput {
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl Shape for GetPermissionPolicyInput {
    const SHAPE_NAME: &'static str = "GetPermissionPolicyRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("resource_arn", "ResourceArn", TypeInfo::String).required(),
    ];
}

/// AWS WAF `PutPermissionPolicyRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PutPermissionPolicyInput {
    #[serde(rename = "Policy", skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl Shape for PutPermissionPolicyInput {
    const SHAPE_NAME: &'static str = "PutPermissionPolicyRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("policy", "Policy", TypeInfo::String).required(),
        FieldMapping::new("resource_arn", "ResourceArn", TypeInfo::String).required(),
    ];
}

