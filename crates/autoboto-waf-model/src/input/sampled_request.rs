//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::TimeWindow;

/// AWS WAF `GetSampledRequestsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetSampledRequestsInput {
    #[serde(rename = "MaxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(rename = "TimeWindow", skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
    #[serde(rename = "WebAclId", skip_serializing_if = "Option::is_none")]
    pub web_acl_id: Option<String>,
}

impl Shape for GetSampledRequestsInput {
    const SHAPE_NAME: &'static str = "GetSampledRequestsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("max_items", "MaxItems", TypeInfo::Long).required(),
        FieldMapping::new("rule_id", "RuleId", TypeInfo::String).required(),
        FieldMapping::new(
            "time_window",
            "TimeWindow",
            TypeInfo::Structure("TimeWindow"),
        )
        .required(),
        FieldMapping::new("web_acl_id", "WebAclId", TypeInfo::String).required(),
    ];
}

