//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::LoggingConfiguration;

/// AWS WAF `DeleteLoggingConfigurationRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteLoggingConfigurationInput {
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl Shape for DeleteLoggingConfigurationInput {
    const SHAPE_NAME: &'static str = "DeleteLoggingConfigurationRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("resource_arn", "ResourceArn", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetLoggingConfigurationRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetLoggingConfigurationInput {
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl Shape for GetLoggingConfigurationInput {
    const SHAPE_NAME: &'static str = "GetLoggingConfigurationRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("resource_arn", "ResourceArn", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListLoggingConfigurationsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLoggingConfigurationsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListLoggingConfigurationsInput {
    const SHAPE_NAME: &'static str = "ListLoggingConfigurationsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `PutLoggingConfigurationRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PutLoggingConfigurationInput {
    #[serde(rename = "LoggingConfiguration", skip_serializing_if = "Option::is_none")]
    pub logging_configuration: Option<LoggingConfiguration>,
}

impl Shape for PutLoggingConfigurationInput {
    const SHAPE_NAME: &'static str = "PutLoggingConfigurationRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "logging_configuration",
            "LoggingConfiguration",
            TypeInfo::Structure("LoggingConfiguration"),
        )
        .required(),
    ];
}

