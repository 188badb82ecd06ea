//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{XssMatchSet, XssMatchSetSummary};

/// AWS WAF `CreateXssMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateXssMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "XssMatchSet", skip_serializing_if = "Option::is_none")]
    pub xss_match_set: Option<XssMatchSet>,
}

impl Shape for CreateXssMatchSetOutput {
    const SHAPE_NAME: &'static str = "CreateXssMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new("xss_match_set", "XssMatchSet", TypeInfo::Structure("XssMatchSet")),
    ];
}

/// AWS WAF `DeleteXssMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteXssMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteXssMatchSetOutput {
    const SHAPE_NAME: &'static str = "DeleteXssMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetXssMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetXssMatchSetOutput {
    #[serde(rename = "XssMatchSet", skip_serializing_if = "Option::is_none")]
    pub xss_match_set: Option<XssMatchSet>,
}

impl Shape for GetXssMatchSetOutput {
    const SHAPE_NAME: &'static str = "GetXssMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("xss_match_set", "XssMatchSet", TypeInfo::Structure("XssMatchSet")),
    ];
}

/// AWS WAF `ListXssMatchSetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListXssMatchSetsOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "XssMatchSets", skip_serializing_if = "Option::is_none")]
    pub xss_match_sets: Option<Vec<XssMatchSetSummary>>,
}

impl Shape for ListXssMatchSetsOutput {
    const SHAPE_NAME: &'static str = "ListXssMatchSetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new(
            "xss_match_sets",
            "XssMatchSets",
            TypeInfo::List(&TypeInfo::Structure("XssMatchSetSummary")),
        ),
    ];
}

/// AWS WAF `UpdateXssMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateXssMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateXssMatchSetOutput {
    const SHAPE_NAME: &'static str = "UpdateXssMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

