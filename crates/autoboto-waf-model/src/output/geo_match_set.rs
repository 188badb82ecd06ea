//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{GeoMatchSet, GeoMatchSetSummary};

/// AWS WAF `CreateGeoMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateGeoMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "GeoMatchSet", skip_serializing_if = "Option::is_none")]
    pub geo_match_set: Option<GeoMatchSet>,
}

impl Shape for CreateGeoMatchSetOutput {
    const SHAPE_NAME: &'static str = "CreateGeoMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new("geo_match_set", "GeoMatchSet", TypeInfo::Structure("GeoMatchSet")),
    ];
}

/// AWS WAF `DeleteGeoMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteGeoMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteGeoMatchSetOutput {
    const SHAPE_NAME: &'static str = "DeleteGeoMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetGeoMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetGeoMatchSetOutput {
    #[serde(rename = "GeoMatchSet", skip_serializing_if = "Option::is_none")]
    pub geo_match_set: Option<GeoMatchSet>,
}

impl Shape for GetGeoMatchSetOutput {
    const SHAPE_NAME: &'static str = "GetGeoMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("geo_match_set", "GeoMatchSet", TypeInfo::Structure("GeoMatchSet")),
    ];
}

/// AWS WAF `ListGeoMatchSetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListGeoMatchSetsOutput {
    #[serde(rename = "GeoMatchSets", skip_serializing_if = "Option::is_none")]
    pub geo_match_sets: Option<Vec<GeoMatchSetSummary>>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListGeoMatchSetsOutput {
    const SHAPE_NAME: &'static str = "ListGeoMatchSetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "geo_match_sets",
            "GeoMatchSets",
            TypeInfo::List(&TypeInfo::Structure("GeoMatchSetSummary")),
        ),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateGeoMatchSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateGeoMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateGeoMatchSetOutput {
    const SHAPE_NAME: &'static str = "UpdateGeoMatchSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

