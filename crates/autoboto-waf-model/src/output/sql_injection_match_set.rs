//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{SqlInjectionMatchSet, SqlInjectionMatchSetSummary};

/// AWS WAF `CreateSqlInjectionMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSqlInjectionMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "SqlInjectionMatchSet", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_set: Option<SqlInjectionMatchSet>,
}

impl Shape for CreateSqlInjectionMatchSetOutput {
    const SHAPE_NAME: &'static str = "CreateSqlInjectionMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new(
            "sql_injection_match_set",
            "SqlInjectionMatchSet",
            TypeInfo::Structure("SqlInjectionMatchSet"),
        ),
    ];
}

/// AWS WAF `DeleteSqlInjectionMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteSqlInjectionMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteSqlInjectionMatchSetOutput {
    const SHAPE_NAME: &'static str = "DeleteSqlInjectionMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetSqlInjectionMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetSqlInjectionMatchSetOutput {
    #[serde(rename = "SqlInjectionMatchSet", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_set: Option<SqlInjectionMatchSet>,
}

impl Shape for GetSqlInjectionMatchSetOutput {
    const SHAPE_NAME: &'static str = "GetSqlInjectionMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "sql_injection_match_set",
            "SqlInjectionMatchSet",
            TypeInfo::Structure("SqlInjectionMatchSet"),
        ),
    ];
}

/// AWS WAF `ListSqlInjectionMatchSetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSqlInjectionMatchSetsOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "SqlInjectionMatchSets", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_sets: Option<Vec<SqlInjectionMatchSetSummary>>,
}

impl Shape for ListSqlInjectionMatchSetsOutput {
    const SHAPE_NAME: &'static str = "ListSqlInjectionMatchSetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new(
            "sql_injection_match_sets",
            "SqlInjectionMatchSets",
            TypeInfo::List(&TypeInfo::Structure("SqlInjectionMatchSetSummary")),
        ),
    ];
}

/// AWS WAF `UpdateSqlInjectionMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSqlInjectionMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateSqlInjectionMatchSetOutput {
    const SHAPE_NAME: &'static str = "UpdateSqlInjectionMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

