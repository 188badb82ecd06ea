//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{SampledHTTPRequest, TimeWindow};

/// AWS WAF `GetSampledRequestsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetSampledRequestsOutput {
    #[serde(rename = "PopulationSize", skip_serializing_if = "Option::is_none")]
    pub population_size: Option<i64>,
    #[serde(rename = "SampledRequests", skip_serializing_if = "Option::is_none")]
    pub sampled_requests: Option<Vec<SampledHTTPRequest>>,
    #[serde(rename = "TimeWindow", skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
}

impl Shape for GetSampledRequestsOutput {
    const SHAPE_NAME: &'static str = "GetSampledRequestsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("population_size", "PopulationSize", TypeInfo::Long),
        FieldMapping::new(
            "sampled_requests",
            "SampledRequests",
            TypeInfo::List(&TypeInfo::Structure("SampledHTTPRequest")),
        ),
        FieldMapping::new("time_window", "TimeWindow", TypeInfo::Structure("TimeWindow")),
    ];
}

