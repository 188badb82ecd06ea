//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::SqlInjectionMatchSetUpdate;

/// AWS WAF `CreateSqlInjectionMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSqlInjectionMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateSqlInjectionMatchSetInput {
    const SHAPE_NAME: &'static str = "CreateSqlInjectionMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteSqlInjectionMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteSqlInjectionMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "SqlInjectionMatchSetId", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_set_id: Option<String>,
}

impl Shape for DeleteSqlInjectionMatchSetInput {
    const SHAPE_NAME: &'static str = "DeleteSqlInjectionMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new(
            "sql_injection_match_set_id",
            "SqlInjectionMatchSetId",
            TypeInfo::String,
        )
        .required(),
    ];
}

/// AWS WAF `GetSqlInjectionMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetSqlInjectionMatchSetInput {
    #[serde(rename = "SqlInjectionMatchSetId", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_set_id: Option<String>,
}

impl Shape for GetSqlInjectionMatchSetInput {
    const SHAPE_NAME: &'static str = "GetSqlInjectionMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "sql_injection_match_set_id",
            "SqlInjectionMatchSetId",
            TypeInfo::String,
        )
        .required(),
    ];
}

/// AWS WAF `ListSqlInjectionMatchSetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSqlInjectionMatchSetsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListSqlInjectionMatchSetsInput {
    const SHAPE_NAME: &'static str = "ListSqlInjectionMatchSetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateSqlInjectionMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSqlInjectionMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "SqlInjectionMatchSetId", skip_serializing_if = "Option::is_none")]
    pub sql_injection_match_set_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<SqlInjectionMatchSetUpdate>>,
}

impl Shape for UpdateSqlInjectionMatchSetInput {
    const SHAPE_NAME: &'static str = "UpdateSqlInjectionMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new(
            "sql_injection_match_set_id",
            "SqlInjectionMatchSetId",
            TypeInfo::String,
        )
        .required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("SqlInjectionMatchSetUpdate")),
        )
        .required(),
    ];
}

