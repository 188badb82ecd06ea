//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use std::collections::HashMap;

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{JobTemplateListBy, JobTemplateSettings, Order};

/// AWS Elemental MediaConvert `CreateJobTemplateRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateJobTemplateInput {
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(rename = "settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<JobTemplateSettings>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl Shape for CreateJobTemplateInput {
    const SHAPE_NAME: &'static str = "CreateJobTemplateRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("category", "category", TypeInfo::String),
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new("queue", "queue", TypeInfo::String),
        FieldMapping::new(
            "settings",
            "settings",
            TypeInfo::Structure("JobTemplateSettings"),
        )
        .required(),
        FieldMapping::new("tags", "tags", TypeInfo::Map(&TypeInfo::String, &TypeInfo::String)),
    ];
}

/// AWS Elemental MediaConvert `DeleteJobTemplateRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteJobTemplateInput {
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for DeleteJobTemplateInput {
    const SHAPE_NAME: &'static str = "DeleteJobTemplateRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "name", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `GetJobTemplateRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetJobTemplateInput {
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for GetJobTemplateInput {
    const SHAPE_NAME: &'static str = "GetJobTemplateRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "name", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `ListJobTemplatesRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListJobTemplatesInput {
    /// HTTP query: `category`.
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// HTTP query: `listBy`.
    #[serde(rename = "listBy", skip_serializing_if = "Option::is_none")]
    pub list_by: Option<JobTemplateListBy>,
    /// HTTP query: `maxResults`.
    #[serde(rename = "maxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// HTTP query: `nextToken`.
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// HTTP query: `order`.
    #[serde(rename = "order", skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl Shape for ListJobTemplatesInput {
    const SHAPE_NAME: &'static str = "ListJobTemplatesRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("category", "category", TypeInfo::String),
        FieldMapping::new("list_by", "listBy", TypeInfo::Enum("JobTemplateListBy")),
        FieldMapping::new("max_results", "maxResults", TypeInfo::Integer),
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
        FieldMapping::new("order", "order", TypeInfo::Enum("Order")),
    ];
}

/// AWS Elemental MediaConvert `UpdateJobTemplateRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateJobTemplateInput {
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(rename = "settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<JobTemplateSettings>,
}

impl Shape for UpdateJobTemplateInput {
    const SHAPE_NAME: &'static str = "UpdateJobTemplateRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("category", "category", TypeInfo::String),
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new("queue", "queue", TypeInfo::String),
        FieldMapping::new("settings", "settings", TypeInfo::Structure("JobTemplateSettings")),
    ];
}

