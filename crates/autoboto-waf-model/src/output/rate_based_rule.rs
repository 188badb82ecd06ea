//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{RateBasedRule, RuleSummary};

/// AWS WAF `CreateRateBasedRuleResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRateBasedRuleOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Rule", skip_serializing_if = "Option::is_none")]
    pub rule: Option<RateBasedRule>,
}

impl Shape for CreateRateBasedRuleOutput {
    const SHAPE_NAME: &'static str = "CreateRateBasedRuleResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new("rule", "Rule", TypeInfo::Structure("RateBasedRule")),
    ];
}

/// AWS WAF `DeleteRateBasedRuleResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRateBasedRuleOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteRateBasedRuleOutput {
    const SHAPE_NAME: &'static str = "DeleteRateBasedRuleResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetRateBasedRuleManagedKeysResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRateBasedRuleManagedKeysOutput {
    #[serde(rename = "ManagedKeys", skip_serializing_if = "Option::is_none")]
    pub managed_keys: Option<Vec<String>>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for GetRateBasedRuleManagedKeysOutput {
    const SHAPE_NAME: &'static str = "GetRateBasedRuleManagedKeysResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("managed_keys", "ManagedKeys", TypeInfo::List(&TypeInfo::String)),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `GetRateBasedRuleResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRateBasedRuleOutput {
    #[serde(rename = "Rule", skip_serializing_if = "Option::is_none")]
    pub rule: Option<RateBasedRule>,
}

impl Shape for GetRateBasedRuleOutput {
    const SHAPE_NAME: &'static str = "GetRateBasedRuleResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("rule", "Rule", TypeInfo::Structure("RateBasedRule")),
    ];
}

/// AWS WAF `ListRateBasedRulesResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRateBasedRulesOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "Rules", skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleSummary>>,
}

impl Shape for ListRateBasedRulesOutput {
    const SHAPE_NAME: &'static str = "ListRateBasedRulesResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new("rules", "Rules", TypeInfo::List(&TypeInfo::Structure("RuleSummary"))),
    ];
}

/// AWS WAF `UpdateRateBasedRuleResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRateBasedRuleOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateRateBasedRuleOutput {
    const SHAPE_NAME: &'static str = "UpdateRateBasedRuleResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

