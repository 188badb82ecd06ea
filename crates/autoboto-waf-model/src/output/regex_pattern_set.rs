//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{RegexPatternSet, RegexPatternSetSummary};

/// AWS WAF `CreateRegexPatternSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRegexPatternSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RegexPatternSet", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_set: Option<RegexPatternSet>,
}

impl Shape for CreateRegexPatternSetOutput {
    const SHAPE_NAME: &'static str = "CreateRegexPatternSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new(
            "regex_pattern_set",
            "RegexPatternSet",
            TypeInfo::Structure("RegexPatternSet"),
        ),
    ];
}

/// AWS WAF `DeleteRegexPatternSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRegexPatternSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteRegexPatternSetOutput {
    const SHAPE_NAME: &'static str = "DeleteRegexPatternSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetRegexPatternSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRegexPatternSetOutput {
    #[serde(rename = "RegexPatternSet", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_set: Option<RegexPatternSet>,
}

impl Shape for GetRegexPatternSetOutput {
    const SHAPE_NAME: &'static str = "GetRegexPatternSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "regex_pattern_set",
            "RegexPatternSet",
            TypeInfo::Structure("RegexPatternSet"),
        ),
    ];
}

/// AWS WAF `ListRegexPatternSetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRegexPatternSetsOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "RegexPatternSets", skip_serializing_if = "Option::is_none")]
    pub regex_pattern_sets: Option<Vec<RegexPatternSetSummary>>,
}

impl Shape for ListRegexPatternSetsOutput {
    const SHAPE_NAME: &'static str = "ListRegexPatternSetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new(
            "regex_pattern_sets",
            "RegexPatternSets",
            TypeInfo::List(&TypeInfo::Structure("RegexPatternSetSummary")),
        ),
    ];
}

/// AWS WAF `UpdateRegexPatternSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRegexPatternSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateRegexPatternSetOutput {
    const SHAPE_NAME: &'static str = "UpdateRegexPatternSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

