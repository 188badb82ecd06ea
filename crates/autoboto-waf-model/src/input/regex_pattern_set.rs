//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::RegexPatternSetUpdate;

/// AWS WAF `CreateRegexPatternSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRegexPatternSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateRegexPatternSetInput {
    const SHAPE_NAME: &'static str = "CreateRegexPatternSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteRegexPatternSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRegexPatternSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RegexPatternSetId", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_set_id: Option<String>,
}

impl Shape for DeleteRegexPatternSetInput {
    const SHAPE_NAME: &'static str = "DeleteRegexPatternSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("regex_pattern_set_id", "RegexPatternSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetRegexPatternSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRegexPatternSetInput {
    #[serde(rename = "RegexPatternSetId", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_set_id: Option<String>,
}

impl Shape for GetRegexPatternSetInput {
    const SHAPE_NAME: &'static str = "GetRegexPatternSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("regex_pattern_set_id", "RegexPatternSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListRegexPatternSetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRegexPatternSetsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListRegexPatternSetsInput {
    const SHAPE_NAME: &'static str = "ListRegexPatternSetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateRegexPatternSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRegexPatternSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RegexPatternSetId", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_set_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<RegexPatternSetUpdate>>,
}

impl Shape for UpdateRegexPatternSetInput {
    const SHAPE_NAME: &'static str = "UpdateRegexPatternSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("regex_pattern_set_id", "RegexPatternSetId", TypeInfo::String).required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("RegexPatternSetUpdate")),
        )
        .required(),
    ];
}

