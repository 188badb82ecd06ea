//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::RegexMatchSetUpdate;

/// AWS WAF `CreateRegexMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRegexMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateRegexMatchSetInput {
    const SHAPE_NAME: &'static str = "CreateRegexMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteRegexMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRegexMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RegexMatchSetId", skip_serializing_if = "Option::is_none")]
    pub regex_match_set_id: Option<String>,
}

impl Shape for DeleteRegexMatchSetInput {
    const SHAPE_NAME: &'static str = "DeleteRegexMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("regex_match_set_id", "RegexMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetRegexMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRegexMatchSetInput {
    #[serde(rename = "RegexMatchSetId", skip_serializing_if = "Option::is_none")]
    pub regex_match_set_id: Option<String>,
}

impl Shape for GetRegexMatchSetInput {
    const SHAPE_NAME: &'static str = "GetRegexMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("regex_match_set_id", "RegexMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListRegexMatchSetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRegexMatchSetsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListRegexMatchSetsInput {
    const SHAPE_NAME: &'static str = "ListRegexMatchSetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateRegexMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRegexMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RegexMatchSetId", skip_serializing_if = "Option::is_none")]
    pub regex_match_set_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<RegexMatchSetUpdate>>,
}

impl Shape for UpdateRegexMatchSetInput {
    const SHAPE_NAME: &'static str = "UpdateRegexMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("regex_match_set_id", "RegexMatchSetId", TypeInfo::String).required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("RegexMatchSetUpdate")),
        )
        .required(),
    ];
}

