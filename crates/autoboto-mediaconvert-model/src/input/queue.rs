//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use std::collections::HashMap;

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{Order, PricingPlan, QueueListBy, QueueStatus, ReservationPlanSettings};

/// AWS Elemental MediaConvert `CreateQueueRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateQueueInput {
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "pricingPlan", skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    #[serde(rename = "reservationPlanSettings", skip_serializing_if = "Option::is_none")]
    pub reservation_plan_settings: Option<ReservationPlanSettings>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl Shape for CreateQueueInput {
    const SHAPE_NAME: &'static str = "CreateQueueRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new("pricing_plan", "pricingPlan", TypeInfo::Enum("PricingPlan")),
        FieldMapping::new(
            "reservation_plan_settings",
            "reservationPlanSettings",
            TypeInfo::Structure("ReservationPlanSettings"),
        ),
        FieldMapping::new("tags", "tags", TypeInfo::Map(&TypeInfo::String, &TypeInfo::String)),
    ];
}

/// AWS Elemental MediaConvert `DeleteQueueRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteQueueInput {
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for DeleteQueueInput {
    const SHAPE_NAME: &'static str = "DeleteQueueRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "name", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `GetQueueRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetQueueInput {
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for GetQueueInput {
    const SHAPE_NAME: &'static str = "GetQueueRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "name", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `ListQueuesRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQueuesInput {
    /// HTTP query: `listBy`.
    #[serde(rename = "listBy", skip_serializing_if = "Option::is_none")]
    pub list_by: Option<QueueListBy>,
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

impl Shape for ListQueuesInput {
    const SHAPE_NAME: &'static str = "ListQueuesRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("list_by", "listBy", TypeInfo::Enum("QueueListBy")),
        FieldMapping::new("max_results", "maxResults", TypeInfo::Integer),
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
        FieldMapping::new("order", "order", TypeInfo::Enum("Order")),
    ];
}

/// AWS Elemental MediaConvert `UpdateQueueRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateQueueInput {
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "reservationPlanSettings", skip_serializing_if = "Option::is_none")]
    pub reservation_plan_settings: Option<ReservationPlanSettings>,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<QueueStatus>,
}

impl Shape for UpdateQueueInput {
    const SHAPE_NAME: &'static str = "UpdateQueueRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new(
            "reservation_plan_settings",
            "reservationPlanSettings",
            TypeInfo::Structure("ReservationPlanSettings"),
        ),
        FieldMapping::new("status", "status", TypeInfo::Enum("QueueStatus")),
    ];
}

