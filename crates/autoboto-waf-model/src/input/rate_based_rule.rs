//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{RateKey, RuleUpdate};

/// AWS WAF `CreateRateBasedRuleRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRateBasedRuleInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RateKey", skip_serializing_if = "Option::is_none")]
    pub rate_key: Option<RateKey>,
    #[serde(rename = "RateLimit", skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i64>,
}

impl Shape for CreateRateBasedRuleInput {
    const SHAPE_NAME: &'static str = "CreateRateBasedRuleRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("metric_name", "MetricName", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
        FieldMapping::new("rate_key", "RateKey", TypeInfo::Enum("RateKey")).required(),
        FieldMapping::new("rate_limit", "RateLimit", TypeInfo::Long).required(),
    ];
}

/// AWS WAF `DeleteRateBasedRuleRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRateBasedRuleInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Shape for DeleteRateBasedRuleInput {
    const SHAPE_NAME: &'static str = "DeleteRateBasedRuleRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetRateBasedRuleRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRateBasedRuleInput {
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Shape for GetRateBasedRuleInput {
    const SHAPE_NAME: &'static str = "GetRateBasedRuleRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetRateBasedRuleManagedKeysRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRateBasedRuleManagedKeysInput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Shape for GetRateBasedRuleManagedKeysInput {
    const SHAPE_NAME: &'static str = "GetRateBasedRuleManagedKeysRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListRateBasedRulesRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRateBasedRulesInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListRateBasedRulesInput {
    const SHAPE_NAME: &'static str = "ListRateBasedRulesRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateRateBasedRuleRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRateBasedRuleInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RateLimit", skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i64>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<RuleUpdate>>,
}

impl Shape for UpdateRateBasedRuleInput {
    const SHAPE_NAME: &'static str = "UpdateRateBasedRuleRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("rate_limit", "RateLimit", TypeInfo::Long).required(),
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("RuleUpdate")),
        )
        .required(),
    ];
}

