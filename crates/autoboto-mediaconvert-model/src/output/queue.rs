//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::Queue;

/// AWS Elemental MediaConvert `CreateQueueResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateQueueOutput {
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<Queue>,
}

impl Shape for CreateQueueOutput {
    const SHAPE_NAME: &'static str = "CreateQueueResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("queue", "queue", TypeInfo::Structure("Queue")),
    ];
}

/// AWS Elemental MediaConvert `DeleteQueueResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteQueueOutput {}

impl Shape for DeleteQueueOutput {
    const SHAPE_NAME: &'static str = "DeleteQueueResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS Elemental MediaConvert `GetQueueResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetQueueOutput {
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<Queue>,
}

impl Shape for GetQueueOutput {
    const SHAPE_NAME: &'static str = "GetQueueResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("queue", "queue", TypeInfo::Structure("Queue")),
    ];
}

/// AWS Elemental MediaConvert `ListQueuesResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQueuesOutput {
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "queues", skip_serializing_if = "Option::is_none")]
    pub queues: Option<Vec<Queue>>,
}

impl Shape for ListQueuesOutput {
    const SHAPE_NAME: &'static str = "ListQueuesResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
        FieldMapping::new("queues", "queues", TypeInfo::List(&TypeInfo::Structure("Queue"))),
    ];
}

/// AWS Elemental MediaConvert `UpdateQueueResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateQueueOutput {
    #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
    pub queue: Option<Queue>,
}

impl Shape for UpdateQueueOutput {
    const SHAPE_NAME: &'static str = "UpdateQueueResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("queue", "queue", TypeInfo::Structure("Queue")),
    ];
}

