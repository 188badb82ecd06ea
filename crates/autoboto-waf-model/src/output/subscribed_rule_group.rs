//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::SubscribedRuleGroupSummary;

/// AWS WAF `ListSubscribedRuleGroupsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSubscribedRuleGroupsOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "RuleGroups", skip_serializing_if = "Option::is_none")]
    pub rule_groups: Option<Vec<SubscribedRuleGroupSummary>>,
}

impl Shape for ListSubscribedRuleGroupsOutput {
    const SHAPE_NAME: &'static str = "ListSubscribedRuleGroupsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new(
            "rule_groups",
            "RuleGroups",
            TypeInfo::List(&TypeInfo::Structure("SubscribedRuleGroupSummary")),
        ),
    ];
}

