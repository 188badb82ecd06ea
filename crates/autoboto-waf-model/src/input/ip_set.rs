//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::IPSetUpdate;

/// AWS WAF `CreateIPSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIPSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateIPSetInput {
    const SHAPE_NAME: &'static str = "CreateIPSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteIPSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteIPSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
}

impl Shape for DeleteIPSetInput {
    const SHAPE_NAME: &'static str = "DeleteIPSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("ip_set_id", "IPSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetIPSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetIPSetInput {
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
}

impl Shape for GetIPSetInput {
    const SHAPE_NAME: &'static str = "GetIPSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("ip_set_id", "IPSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListIPSetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListIPSetsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListIPSetsInput {
    const SHAPE_NAME: &'static str = "ListIPSetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateIPSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateIPSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<IPSetUpdate>>,
}

impl Shape for UpdateIPSetInput {
    const SHAPE_NAME: &'static str = "UpdateIPSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("ip_set_id", "IPSetId", TypeInfo::String).required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("IPSetUpdate")),
        )
        .required(),
    ];
}

