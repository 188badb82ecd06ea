//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use std::collections::HashMap;

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{Order, PresetListBy, PresetSettings};

/// AWS Elemental MediaConvert `CreatePresetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePresetInput {
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<PresetSettings>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl Shape for CreatePresetInput {
    const SHAPE_NAME: &'static str = "CreatePresetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("category", "category", TypeInfo::String),
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new("settings", "settings", TypeInfo::Structure("PresetSettings")).required(),
        FieldMapping::new("tags", "tags", TypeInfo::Map(&TypeInfo::String, &TypeInfo::String)),
    ];
}

/// AWS Elemental MediaConvert `DeletePresetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePresetInput {
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for DeletePresetInput {
    const SHAPE_NAME: &'static str = "DeletePresetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "name", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `GetPresetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPresetInput {
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for GetPresetInput {
    const SHAPE_NAME: &'static str = "GetPresetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("name", "name", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `ListPresetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPresetsInput {
    /// HTTP query: `category`.
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// HTTP query: `listBy`.
    #[serde(rename = "listBy", skip_serializing_if = "Option::is_none")]
    pub list_by: Option<PresetListBy>,
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

impl Shape for ListPresetsInput {
    const SHAPE_NAME: &'static str = "ListPresetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("category", "category", TypeInfo::String),
        FieldMapping::new("list_by", "listBy", TypeInfo::Enum("PresetListBy")),
        FieldMapping::new("max_results", "maxResults", TypeInfo::Integer),
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
        FieldMapping::new("order", "order", TypeInfo::Enum("Order")),
    ];
}

/// AWS Elemental MediaConvert `UpdatePresetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePresetInput {
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTTP label (URI path).
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<PresetSettings>,
}

impl Shape for UpdatePresetInput {
    const SHAPE_NAME: &'static str = "UpdatePresetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("category", "category", TypeInfo::String),
        FieldMapping::new("description", "description", TypeInfo::String),
        FieldMapping::new("name", "name", TypeInfo::String).required(),
        FieldMapping::new("settings", "settings", TypeInfo::Structure("PresetSettings")),
    ];
}

