//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{Rule, RuleSummary};

/// AWS WAF `CreateRuleResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRuleOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Rule", skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl Shape for CreateRuleOutput {
    const SHAPE_NAME: &'static str = "CreateRuleResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new("rule", "Rule", TypeInfo::Structure("Rule")),
    ];
}

/// AWS WAF `DeleteRuleResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRuleOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteRuleOutput {
    const SHAPE_NAME: &'static str = "DeleteRuleResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetRuleResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRuleOutput {
    #[serde(rename = "Rule", skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl Shape for GetRuleOutput {
    const SHAPE_NAME: &'static str = "GetRuleResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("rule", "Rule", TypeInfo::Structure("Rule")),
    ];
}

/// AWS WAF `ListRulesResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRulesOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "Rules", skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleSummary>>,
}

impl Shape for ListRulesOutput {
    const SHAPE_NAME: &'static str = "ListRulesResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new("rules", "Rules", TypeInfo::List(&TypeInfo::Structure("RuleSummary"))),
    ];
}

/// AWS WAF `UpdateRuleResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRuleOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateRuleOutput {
    const SHAPE_NAME: &'static str = "UpdateRuleResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

