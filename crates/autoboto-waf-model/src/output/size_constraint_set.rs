//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::{SizeConstraintSet, SizeConstraintSetSummary};

/// AWS WAF `CreateSizeConstraintSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSizeConstraintSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "SizeConstraintSet", skip_serializing_if = "Option::is_none")]
    pub size_constraint_set: Option<SizeConstraintSet>,
}

impl Shape for CreateSizeConstraintSetOutput {
    const SHAPE_NAME: &'static str = "CreateSizeConstraintSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
        FieldMapping::new(
            "size_constraint_set",
            "SizeConstraintSet",
            TypeInfo::Structure("SizeConstraintSet"),
        ),
    ];
}

/// AWS WAF `DeleteSizeConstraintSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteSizeConstraintSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for DeleteSizeConstraintSetOutput {
    const SHAPE_NAME: &'static str = "DeleteSizeConstraintSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

/// AWS WAF `GetSizeConstraintSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetSizeConstraintSetOutput {
    #[serde(rename = "SizeConstraintSet", skip_serializing_if = "Option::is_none")]
    pub size_constraint_set: Option<SizeConstraintSet>,
}

impl Shape for GetSizeConstraintSetOutput {
    const SHAPE_NAME: &'static str = "GetSizeConstraintSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "size_constraint_set",
            "SizeConstraintSet",
            TypeInfo::Structure("SizeConstraintSet"),
        ),
    ];
}

/// AWS WAF `ListSizeConstraintSetsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSizeConstraintSetsOutput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(rename = "SizeConstraintSets", skip_serializing_if = "Option::is_none")]
    pub size_constraint_sets: Option<Vec<SizeConstraintSetSummary>>,
}

impl Shape for ListSizeConstraintSetsOutput {
    const SHAPE_NAME: &'static str = "ListSizeConstraintSetsResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
        FieldMapping::new(
            "size_constraint_sets",
            "SizeConstraintSets",
            TypeInfo::List(&TypeInfo::Structure("SizeConstraintSetSummary")),
        ),
    ];
}

/// AWS WAF `UpdateSizeConstraintSetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSizeConstraintSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl Shape for UpdateSizeConstraintSetOutput {
    const SHAPE_NAME: &'static str = "UpdateSizeConstraintSetResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String),
    ];
}

