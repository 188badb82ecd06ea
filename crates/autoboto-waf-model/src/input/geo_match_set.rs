//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::GeoMatchSetUpdate;

/// AWS WAF `CreateGeoMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateGeoMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateGeoMatchSetInput {
    const SHAPE_NAME: &'static str = "CreateGeoMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteGeoMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteGeoMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "GeoMatchSetId", skip_serializing_if = "Option::is_none")]
    pub geo_match_set_id: Option<String>,
}

impl Shape for DeleteGeoMatchSetInput {
    const SHAPE_NAME: &'static str = "DeleteGeoMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("geo_match_set_id", "GeoMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `GetGeoMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetGeoMatchSetInput {
    #[serde(rename = "GeoMatchSetId", skip_serializing_if = "Option::is_none")]
    pub geo_match_set_id: Option<String>,
}

impl Shape for GetGeoMatchSetInput {
    const SHAPE_NAME: &'static str = "GetGeoMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("geo_match_set_id", "GeoMatchSetId", TypeInfo::String).required(),
    ];
}

/// AWS WAF `ListGeoMatchSetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListGeoMatchSetsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListGeoMatchSetsInput {
    const SHAPE_NAME: &'static str = "ListGeoMatchSetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateGeoMatchSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateGeoMatchSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "GeoMatchSetId", skip_serializing_if = "Option::is_none")]
    pub geo_match_set_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<GeoMatchSetUpdate>>,
}

impl Shape for UpdateGeoMatchSetInput {
    const SHAPE_NAME: &'static str = "UpdateGeoMatchSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("geo_match_set_id", "GeoMatchSetId", TypeInfo::String).required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("GeoMatchSetUpdate")),
        )
        .required(),
    ];
}

