//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::ByteMatchSetUpdate;

/// AWS WAF `CreateByteMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateByteMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateByteMatchSetInput {
    const SHAPE_NAME: &'static str = "CreateByteMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteByteMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteByteMatchSetInput {
    #[serde(rename = "ByteMatchSetId", skip_serializing_if = "Option::is_none")]
    pub byte_match_set_id: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteByteMatchSetInput {
    const SHAPE_NAME: &'static str = "DeleteByteMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("byte_match_set_id", "ByteMatchSetId", TypeInfo::String).required(),
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetByteMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetByteMatchSetInput {
    #[serde(rename = "ByteMatchSetId", skip_serializing_if = "Option::is_none")]
    pub byte_match_set_id: Option<String>,
}

impl Shape for GetByteMatchSetInput {
    const SHAPE_NAME: &'static str = "GetByteMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("byte_match_set_id", "ByteMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListByteMatchSetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListByteMatchSetsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListByteMatchSetsInput {
    const SHAPE_NAME: &'static str = "ListByteMatchSetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateByteMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateByteMatchSetInput {
    #[serde(rename = "ByteMatchSetId", skip_serializing_if = "Option::is_none")]
    pub byte_match_set_id: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<ByteMatchSetUpdate>>,
}

impl Shape for UpdateByteMatchSetInput {
    const SHAPE_NAME: &'static str = "UpdateByteMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("byte_match_set_id", "ByteMatchSetId", TypeInfo::String).required(),
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("ByteMatchSetUpdate")),
        )
        .required(),
    ];
}

