//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::DescribeEndpointsMode;

/// AWS Elemental MediaConvert `DescribeEndpointsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeEndpointsInput {
    #[serde(rename = "maxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "mode", skip_serializing_if = "Option::is_none")]
    pub mode: Option<DescribeEndpointsMode>,
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Shape for DescribeEndpointsInput {
    const SHAPE_NAME: &'static str = "DescribeEndpointsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("max_results", "maxResults", TypeInfo::Integer),
        FieldMapping::new("mode", "mode", TypeInfo::Enum("DescribeEndpointsMode")),
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
    ];
}

