//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{ByteMatchSet, ByteMatchSetSummary};

/// AWS WAF `CreateByteMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateByteMatchSetOutput {
    #[serde(rename = "ByteMatchSet", skip_serializing_if = "Option::is_none")]
    pub byte_match_set: Option<ByteMatchSet>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for CreateByteMatchSetOutput {
    const SHAPE_NAME: &'static str = "CreateByteMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("byte_match_set", "ByteMatchSet", TypeInfo::Structure("ByteMatchSet")),
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `DeleteByteMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteByteMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteByteMatchSetOutput {
    const SHAPE_NAME: &'static str = "DeleteByteMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetByteMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetByteMatchSetOutput {
    #[serde(rename = "ByteMatchSet", skip_serializing_if = "Option::is_none")]
    pub byte_match_set: Option<ByteMatchSet>,
}

impl Shape for GetByteMatchSetOutput {
    const SHAPE_NAME: &'static str = "GetByteMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("byte_match_set", "ByteMatchSet", TypeInfo::Structure("ByteMatchSet")),
    ];
}

/// AWS WAF `ListByteMatchSetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListByteMatchSetsOutput {
    #[serde(rename = "ByteMatchSets", skip_serializing_if = "Option::is_none")]
    pub byte_match_sets: Option<Vec<ByteMatchSetSummary>>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListByteMatchSetsOutput {
    const SHAPE_NAME: &'static str = "ListByteMatchSetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "byte_match_sets",
            "ByteMatchSets",
            TypeInfo::List(&TypeInfo::Structure("ByteMatchSetSummary")),
        ),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateByteMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateByteMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateByteMatchSetOutput {
    const SHAPE_NAME: &'static str = "UpdateByteMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

