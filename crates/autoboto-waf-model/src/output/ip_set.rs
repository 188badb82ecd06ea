//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{IPSet, IPSetSummary};

/// AWS WAF `CreateIPSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIPSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "IPSet", skip_serializing_if = "Option::is_none")]
    pub ip_set: Option<IPSet>,
}

impl Shape for CreateIPSetOutput {
    const SHAPE_NAME: &'static str = "CreateIPSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new("ip_set", "IPSet", TypeInfo::Structure("IPSet")),
    ];
}

/// AWS WAF `DeleteIPSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteIPSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteIPSetOutput {
    const SHAPE_NAME: &'static str = "DeleteIPSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetIPSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetIPSetOutput {
    #[serde(rename = "IPSet", skip_serializing_if = "Option::is_none")]
    pub ip_set: Option<IPSet>,
}

impl Shape for GetIPSetOutput {
    const SHAPE_NAME: &'static str = "GetIPSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("ip_set", "IPSet", TypeInfo::Structure("IPSet")),
    ];
}

/// AWS WAF `ListIPSetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListIPSetsOutput {
    #[serde(rename = "IPSets", skip_serializing_if = "Option::is_none")]
    pub ip_sets: Option<Vec<IPSetSummary>>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListIPSetsOutput {
    const SHAPE_NAME: &'static str = "ListIPSetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "ip_sets",
            "IPSets",
            TypeInfo::List(&TypeInfo::Structure("IPSetSummary")),
        ),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateIPSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateIPSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateIPSetOutput {
    const SHAPE_NAME: &'static str = "UpdateIPSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

