//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{ActivatedRule, RuleGroup, RuleGroupSummary};

/// AWS WAF `CreateRuleGroupResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRuleGroupOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "RuleGroup", skip_serializing_if = "Option::is_none")]
    pub rule_group: Option<RuleGroup>,
}

impl Shape for CreateRuleGroupOutput {
    const SHAPE_NAME: &'static str = "CreateRuleGroupResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new("rule_group", "RuleGroup", TypeInfo::Structure("RuleGroup")),
    ];
}

/// AWS WAF `DeleteRuleGroupResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRuleGroupOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteRuleGroupOutput {
    const SHAPE_NAME: &'static str = "DeleteRuleGroupResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetRuleGroupResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRuleGroupOutput {
    #[serde(rename = "RuleGroup", skip_serializing_if = "Option::is_none")]
    pub rule_group: Option<RuleGroup>,
}

impl Shape for GetRuleGroupOutput {
    const SHAPE_NAME: &'static str = "GetRuleGroupResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("rule_group", "RuleGroup", TypeInfo::Structure("RuleGroup")),
    ];
}

/// AWS WAF `ListActivatedRulesInRuleGroupResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListActivatedRulesInRuleGroupOutput {
    #[serde(rename = "ActivatedRules", skip_serializing_if = "Option::is_none")]
    pub activated_rules: Option<Vec<ActivatedRule>>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListActivatedRulesInRuleGroupOutput {
    const SHAPE_NAME: &'static str = "ListActivatedRulesInRuleGroupResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "activated_rules",
            "ActivatedRules",
            TypeInfo::List(&TypeInfo::Structure("ActivatedRule")),
        ),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `ListRuleGroupsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRuleGroupsOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "RuleGroups", skip_serializing_if = "Option::is_none")]
    pub rule_groups: Option<Vec<RuleGroupSummary>>,
}

impl Shape for ListRuleGroupsOutput {
    const SHAPE_NAME: &'static str = "ListRuleGroupsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new(
            "rule_groups",
            "RuleGroups",
            TypeInfo::List(&TypeInfo::Structure("RuleGroupSummary")),
        ),
    ];
}

/// AWS WAF `UpdateRuleGroupResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRuleGroupOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateRuleGroupOutput {
    const SHAPE_NAME: &'static str = "UpdateRuleGroupResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

