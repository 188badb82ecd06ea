//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{RegexMatchSet, RegexMatchSetSummary};

/// AWS WAF `CreateRegexMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRegexMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RegexMatchSet", skip_serializing_if = "Option::is_none")]
    pub regex_match_set: Option<RegexMatchSet>,
}

impl Shape for CreateRegexMatchSetOutput {
    const SHAPE_NAME: &'static str = "CreateRegexMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new("regex_match_set", "RegexMatchSet", TypeInfo::Structure("RegexMatchSet")),
    ];
}

/// AWS WAF `DeleteRegexMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRegexMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteRegexMatchSetOutput {
    const SHAPE_NAME: &'static str = "DeleteRegexMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetRegexMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRegexMatchSetOutput {
    #[serde(rename = "RegexMatchSet", skip_serializing_if = "Option::is_none")]
    pub regex_match_set: Option<RegexMatchSet>,
}

impl Shape for GetRegexMatchSetOutput {
    const SHAPE_NAME: &'static str = "GetRegexMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("regex_match_set", "RegexMatchSet", TypeInfo::Structure("RegexMatchSet")),
    ];
}

/// AWS WAF `ListRegexMatchSetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRegexMatchSetsOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "RegexMatchSets", skip_serializing_if = "Option::is_none")]
    pub regex_match_sets: Option<Vec<RegexMatchSetSummary>>,
}

impl Shape for ListRegexMatchSetsOutput {
    const SHAPE_NAME: &'static str = "ListRegexMatchSetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new(
            "regex_match_sets",
            "RegexMatchSets",
            TypeInfo::List(&TypeInfo::Structure("RegexMatchSetSummary")),
        ),
    ];
}

/// AWS WAF `UpdateRegexMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRegexMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateRegexMatchSetOutput {
    const SHAPE_NAME: &'static str = "UpdateRegexMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

