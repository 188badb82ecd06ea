//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::Endpoint;

/// AWS Elemental MediaConvert `DescribeEndpointsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeEndpointsOutput {
    #[serde(rename = "endpoints", skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<Endpoint>>,
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Shape for DescribeEndpointsOutput {
    const SHAPE_NAME: &'static str = "DescribeEndpointsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "endpoints",
            "endpoints",
            TypeInfo::List(&TypeInfo::Structure("Endpoint")),
        ),
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
    ];
}

