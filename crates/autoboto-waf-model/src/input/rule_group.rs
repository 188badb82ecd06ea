//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::RuleGroupUpdate;

/// AWS WAF `CreateRuleGroupRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRuleGroupInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateRuleGroupInput {
    const SHAPE_NAME: &'static str = "CreateRuleGroupRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("metric_name", "MetricName", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteRuleGroupRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRuleGroupInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RuleGroupId", skip_serializing_if = "Option::is_none")]
    pub rule_group_id: Option<String>,
}

impl Shape for DeleteRuleGroupInput {
    const SHAPE_NAME: &'static str = "DeleteRuleGroupRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("rule_group_id", "RuleGroupId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetRuleGroupRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRuleGroupInput {
    #[serde(rename = "RuleGroupId", skip_serializing_if = "Option::is_none")]
    pub rule_group_id: Option<String>,
}

impl Shape for GetRuleGroupInput {
    const SHAPE_NAME: &'static str = "GetRuleGroupRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("rule_group_id", "RuleGroupId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListActivatedRulesInRuleGroupRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListActivatedRulesInRuleGroupInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "RuleGroupId", skip_serializing_if = "Option::is_none")]
    pub rule_group_id: Option<String>,
}

impl Shape for ListActivatedRulesInRuleGroupInput {
    const SHAPE_NAME: &'static str = "ListActivatedRulesInRuleGroupRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new("rule_group_id", "RuleGroupId", TypeInfo::String),
    ];
}

/// AWS WAF `ListRuleGroupsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRuleGroupsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListRuleGroupsInput {
    const SHAPE_NAME: &'static str = "ListRuleGroupsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateRuleGroupRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRuleGroupInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RuleGroupId", skip_serializing_if = "Option::is_none")]
    pub rule_group_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<RuleGroupUpdate>>,
}

impl Shape for UpdateRuleGroupInput {
    const SHAPE_NAME: &'static str = "UpdateRuleGroupRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("rule_group_id", "RuleGroupId", TypeInfo::String).required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("RuleGroupUpdate")),
        )
        .required(),
    ];
}

