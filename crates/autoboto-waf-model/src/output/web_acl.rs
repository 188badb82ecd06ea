//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{WebACL, WebACLSummary};

/// AWS WAF `CreateWebACLResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateWebACLOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "WebACL", skip_serializing_if = "Option::is_none")]
    pub web_acl: Option<WebACL>,
}

impl Shape for CreateWebACLOutput {
    const SHAPE_NAME: &'static str = "CreateWebACLResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new("web_acl", "WebACL", TypeInfo::Structure("WebACL")),
    ];
}

/// AWS WAF `DeleteWebACLResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteWebACLOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteWebACLOutput {
    const SHAPE_NAME: &'static str = "DeleteWebACLResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetWebACLResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetWebACLOutput {
    #[serde(rename = "WebACL", skip_serializing_if = "Option::is_none")]
    pub web_acl: Option<WebACL>,
}

impl Shape for GetWebACLOutput {
    const SHAPE_NAME: &'static str = "GetWebACLResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("web_acl", "WebACL", TypeInfo::Structure("WebACL")),
    ];
}

/// AWS WAF `ListWebACLsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListWebACLsOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "WebACLs", skip_serializing_if = "Option::is_none")]
    pub web_ac_ls: Option<Vec<WebACLSummary>>,
}

impl Shape for ListWebACLsOutput {
    const SHAPE_NAME: &'static str = "ListWebACLsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new(
            "web_ac_ls",
            "WebACLs",
            TypeInfo::List(&TypeInfo::Structure("WebACLSummary")),
        ),
    ];
}

/// AWS WAF `UpdateWebACLResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateWebACLOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateWebACLOutput {
    const SHAPE_NAME: &'static str = "UpdateWebACLResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

