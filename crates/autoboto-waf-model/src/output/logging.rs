//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::LoggingConfiguration;

/// AWS WAF `DeleteLoggingConfigurationResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteLoggingConfigurationOutput {}

impl Shape for DeleteLoggingConfigurationOutput {
    const SHAPE_NAME: &'static str = "DeleteLoggingConfigurationResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS WAF `GetLoggingConfigurationResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetLoggingConfigurationOutput {
    #[serde(rename = "LoggingConfiguration", skip_serializing_if = "Option::is_none")]
    pub logging_configuration: Option<LoggingConfiguration>,
}

impl Shape for GetLoggingConfigurationOutput {
    const SHAPE_NAME: &'static str = "GetLoggingConfigurationResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "logging_configuration",
            "LoggingConfiguration",
            TypeInfo::Structure("LoggingConfiguration"),
        ),
    ];
}

/// AWS WAF `ListLoggingConfigurationsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLoggingConfigurationsOutput {
    #[serde(rename = "LoggingConfigurations", skip_serializing_if = "Option::is_none")]
    pub logging_configurations: Option<Vec<LoggingConfiguration>>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListLoggingConfigurationsOutput {
    const SHAPE_NAME: &'static str = "ListLoggingConfigurationsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "logging_configurations",
            "LoggingConfigurations",
            TypeInfo::List(&TypeInfo::Structure("LoggingConfiguration")),
        ),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `PutLoggingConfigurationResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PutLoggingConfigurationOutput {
    #[serde(rename = "LoggingConfiguration", skip_serializing_if = "Option::is_none")]
    pub logging_configuration: Option<LoggingConfiguration>,
}

impl Shape for PutLoggingConfigurationOutput {
    const SHAPE_NAME: &'static str = "PutLoggingConfigurationResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "logging_configuration",
            "LoggingConfiguration",
            TypeInfo::Structure("LoggingConfiguration"),
        ),
    ];
}

