//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::Preset;

/// AWS Elemental MediaConvert `CreatePresetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePresetOutput {
    #[serde(rename = "preset", skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
}

impl Shape for CreatePresetOutput {
    const SHAPE_NAME: &'static str = "CreatePresetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("preset", "preset", TypeInfo::Structure("Preset")),
    ];
}

/// AWS Elemental MediaConvert `DeletePresetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePresetOutput {}

impl Shape for DeletePresetOutput {
    const SHAPE_NAME: &'static str = "DeletePresetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS Elemental MediaConvert `GetPresetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPresetOutput {
    #[serde(rename = "preset", skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
}

impl Shape for GetPresetOutput {
    const SHAPE_NAME: &'static str = "GetPresetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("preset", "preset", TypeInfo::Structure("Preset")),
    ];
}

/// AWS Elemental MediaConvert `ListPresetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPresetsOutput {
    #[serde(rename = "nextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "presets", skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<Preset>>,
}

impl Shape for ListPresetsOutput {
    const SHAPE_NAME: &'static str = "ListPresetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_token", "nextToken", TypeInfo::String),
        FieldMapping::new("presets", "presets", TypeInfo::List(&TypeInfo::Structure("Preset"))),
    ];
}

/// AWS Elemental MediaConvert `UpdatePresetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePresetOutput {
    #[serde(rename = "preset", skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
}

impl Shape for UpdatePresetOutput {
    const SHAPE_NAME: &'static str = "UpdatePresetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("preset", "preset", TypeInfo::Structure("Preset")),
    ];
}

