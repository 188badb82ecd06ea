//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::JobTemplate;

/// AWS Elemental MediaConvert `CreateJobTemplateResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateJobTemplateOutput {
    #[serde(rename = "jobTemplate", skip_serializing_if = "Option::is_none")]
    pub job_template: Option<JobTemplate>,
}

impl Shape for CreateJobTemplateOutput {
    const SHAPE_NAME: &'static str = "CreateJobTemplateResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("job_template", "jobTemplate", TypeInfo::Structure("JobTemplate")),
    ];
}

/// AWS Elemental MediaConvert `DeleteJobTemplateResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteJobTemplateOutput {}

impl Shape for DeleteJobTemplateOutput {
    const SHAPE_NAME: &'static str = "DeleteJobTemplateResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS Elemental MediaConvert `GetJobTemplateResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetJobTemplateOutput {
    #[serde(rename = "jobTemplate", skip_serializing_if = "Option::is_none")]
    pub job_template: Option<JobTemplate>,
}

impl Shape for GetJobTemplateOutput {
    const SHAPE_NAME: &'static str = "GetJobTemplateResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("job_template", "jobTemplate", TypeInfo::Structure("JobTemplate")),
    ];
}

/// AWS Elemental MediaConvert `ListJobTemplatesResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListJobTemplatesOutput {
    #[serde(rename = "jobTemplates", skip_serializing_if = "Option::is_none")]
    pub job_templates: Option<Vec<JobTemplate>>,
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Shape for ListJobTemplatesOutput {
    const SHAPE_NAME: &'static str = "ListJobTemplatesResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "job_templates",
            "jobTemplates",
            TypeInfo::List(&TypeInfo::Structure("JobTemplate")),
        ),
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
    ];
}

/// AWS Elemental MediaConvert `UpdateJobTemplateResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateJobTemplateOutput {
    #[serde(rename = "jobTemplate", skip_serializing_if = "Option::is_none")]
    pub job_template: Option<JobTemplate>,
}

impl Shape for UpdateJobTemplateOutput {
    const SHAPE_NAME: &'static str = "UpdateJobTemplateResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("job_template", "jobTemplate", TypeInfo::Structure("JobTemplate")),
    ];
}

