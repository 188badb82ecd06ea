//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use std::collections::HashMap;

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

/// AWS Elemental MediaConvert `ListTagsForResourceRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTagsForResourceInput {
    /// HTTP label (URI path).
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl Shape for ListTagsForResourceInput {
    const SHAPE_NAME: &'static str = "ListTagsForResourceRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String).required(),
    ];
}

/// AWS Elemental MediaConvert `TagResourceRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagResourceInput {
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl Shape for TagResourceInput {
    const SHAPE_NAME: &'static str = "TagResourceRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String).required(),
        FieldMapping::new(
            "tags",
            "tags",
            TypeInfo::Map(&TypeInfo::String, &TypeInfo::String),
        )
        .required(),
    ];
}

/// AWS Elemental MediaConvert `UntagResourceRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UntagResourceInput {
    /// HTTP label (URI path).
    #[serde(rename = "arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "tagKeys", skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl Shape for UntagResourceInput {
    const SHAPE_NAME: &'static str = "UntagResourceRequest";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("arn", "arn", TypeInfo::String).required(),
        FieldMapping::new("tag_keys", "tagKeys", TypeInfo::List(&TypeInfo::String)),
    ];
}

