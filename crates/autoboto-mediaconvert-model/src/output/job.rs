//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::Job;

/// AWS Elemental MediaConvert `CancelJobResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelJobOutput {}

impl Shape for CancelJobOutput {
    const SHAPE_NAME: &'static str = "CancelJobResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS Elemental MediaConvert `CreateJobResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateJobOutput {
    #[serde(rename = "job", skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

impl Shape for CreateJobOutput {
    const SHAPE_NAME: &'static str = "CreateJobResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("job", "job", TypeInfo::Structure("Job")),
    ];
}

/// AWS Elemental MediaConvert `GetJobResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetJobOutput {
    #[serde(rename = "job", skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

impl Shape for GetJobOutput {
    const SHAPE_NAME: &'static str = "GetJobResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("job", "job", TypeInfo::Structure("Job")),
    ];
}

/// AWS Elemental MediaConvert `ListJobsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListJobsOutput {
    #[serde(rename = "jobs", skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<Job>>,
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Shape for ListJobsOutput {
    const SHAPE_NAME: &'static str = "ListJobsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("jobs", "jobs", TypeInfo::List(&TypeInfo::Structure("Job"))),
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
    ];
}

