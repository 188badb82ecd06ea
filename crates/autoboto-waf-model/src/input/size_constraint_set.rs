//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::SizeConstraintSetUpdate;

/// AWS WAF `CreateSizeConstraintSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSizeConstraintSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shape for CreateSizeConstraintSetInput {
    const SHAPE_NAME: &'static str = "CreateSizeConstraintSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new("name", "Name", TypeInfo::String).required(),
    ];
}

/// AWS WAF `DeleteSizeConstraintSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteSizeConstraintSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "SizeConstraintSetId", skip_serializing_if = "Option::is_none")]
    pub size_constraint_set_id: Option<String>,
}

impl Shape for DeleteSizeConstraintSetInput {
    const SHAPE_NAME: &'static str = "DeleteSizeConstraintSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new(
            "size_constraint_set_id",
            "SizeConstraintSetId",
            TypeInfo::String,
        )
        .required(),
    ];
}

/// AWS WAF `GetSizeConstraintSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetSizeConstraintSetInput {
    #[serde(rename = "SizeConstraintSetId", skip_serializing_if = "Option::is_none")]
    pub size_constraint_set_id: Option<String>,
}

impl Shape for GetSizeConstraintSetInput {
    const SHAPE_NAME: &'static str = "GetSizeConstraintSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new(
            "size_constraint_set_id",
            "SizeConstraintSetId",
            TypeInfo::String,
        )
        .required(),
    ];
}

/// AWS WAF `ListSizeConstraintSetsRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSizeConstraintSetsInput {
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl Shape for ListSizeConstraintSetsInput {
    const SHAPE_NAME: &'static str = "ListSizeConstraintSetsRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("limit", "Limit", TypeInfo::Integer),
        FieldMapping::new("next_marker", "NextMarker", TypeInfo::String),
    ];
}

/// AWS WAF `UpdateSizeConstraintSetRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSizeConstraintSetInput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(rename = "SizeConstraintSetId", skip_serializing_if = "Option::is_none")]
    pub size_constraint_set_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<SizeConstraintSetUpdate>>,
}

impl Shape for UpdateSizeConstraintSetInput {
    const SHAPE_NAME: &'static str = "UpdateSizeConstraintSetRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("change_token", "ChangeToken", TypeInfo::String).required(),
        FieldMapping::new(
            "size_constraint_set_id",
            "SizeConstraintSetId",
            TypeInfo::String,
        )
        .required(),
        FieldMapping::new(
            "updates",
            "Updates",
            TypeInfo::List(&TypeInfo::Structure("SizeConstraintSetUpdate")),
        )
        .required(),
    ];
}

