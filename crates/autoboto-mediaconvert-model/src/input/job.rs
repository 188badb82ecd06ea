//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use std::collections::HashMap;

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{JobSettings, JobStatus, Order};

/// AWS Elemental MediaConvert `CancelJobRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelJobInput {
    /// HTTP label (URI path).
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Shape for CancelJobInput {
    const SHAPE_NAME: &'static str = "CancelJobRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("id", "id", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `CreateJobRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateJobInput {
    #[serde(rename = "billingTagsSource", skip_serializing_if = "Option::is_none")]
    pub billing_tags_source: Option<String>,
    #[serde(rename = "clientRequestToken", skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(rename = "jobTemplate", skip_serializing_if = "Option::is_none")]
    pub job_template: Option<String>,
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(rename = "role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<JobSettings>,
    #[serde(rename = "userMetadata", skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<HashMap<String, String>>,
}

impl Shape for CreateJobInput {
    const SHAPE_NAME: &'static str = "CreateJobRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("billing_tags_source", "billingTagsSource", TypeInfo::String),
        FieldMapping::new("client_request_token", "clientRequestToken", TypeInfo::String),
        FieldMapping::new("job_template", "jobTemplate", TypeInfo::String),
        FieldMapping::new("queue", "queue", TypeInfo::String),
        FieldMapping::new("role", "role", TypeInfo::String).required(),
        FieldMapping::new("settings", "settings", TypeInfo::Structure("JobSettings")).required(),
        FieldMapping::new(
            "user_metadata",
            "userMetadata",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::String),
        ),
    ];
}

/// AWS Elemental MediaConvert `GetJobRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetJobInput {
    /// HTTP label (URI path).
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Shape for GetJobInput {
    const SHAPE_NAME: &'static str = "GetJobRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("id", "id", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `ListJobsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListJobsInput {
    /// HTTP query: `maxResults`.
    #[serde(rename = "maxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// HTTP query: `nextToken`.
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// HTTP query: `order`.
    #[serde(rename = "order", skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// HTTP query: `queue`.
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    /// HTTP query: `status`.
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

impl Shape for ListJobsInput {
    const SHAPE_NAME: &'static str = "ListJobsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("max_results", "maxResults", TypeInfo::Integer),
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
        FieldMapping::new("order", "order", TypeInfo::Enum("Order")),
        FieldMapping::new("queue", "queue", TypeInfo::String),
        FieldMapping::new("status", "status", TypeInfo::Enum("JobStatus")),
    ];
}

