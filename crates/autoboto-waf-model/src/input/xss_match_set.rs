//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::XssMatchSetUpdate;

/// AWS WAF `CreateXssMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateXssMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateXssMatchSetInput {
    const SHAPE_NAME: &'static str = "CreateXssMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteXssMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteXssMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "XssMatchSetId", skip_serializing_if = "Option::is_none")]
    pub xss_match_set_id: Option<String>,
}

impl Shape for DeleteXssMatchSetInput {
    const SHAPE_NAME: &'static str = "DeleteXssMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("xss_match_set_id", "XssMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetXssMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetXssMatchSetInput {
    #[serde(rename = "XssMatchSetId", skip_serializing_if = "Option::is_none")]
    pub xss_match_set_id: Option<String>,
}

impl Shape for GetXssMatchSetInput {
    const SHAPE_NAME: &'static str = "GetXssMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("xss_match_set_id", "XssMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListXssMatchSetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListXssMatchSetsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListXssMatchSetsInput {
    const SHAPE_NAME: &'static str = "ListXssMatchSetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateXssMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateXssMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<XssMatchSetUpdate>>,
    #[serde(rename = "XssMatchSetId", skip_serializing_if = "Option::is_none")]
    pub xss_match_set_id: Option<String>,
}

impl Shape for UpdateXssMatchSetInput {
    const SHAPE_NAME: &'static str = "UpdateXssMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("XssMatchSetUpdate")),
        )
        .required(),
        FieldMapping::new("xss_match_set_id", "XssMatchSetId", TypeInfo::String).required(),
    ];
}

