//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use autoboto_core::{FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

use crate::types::ResourceTags;

/// AWS Elemental MediaConvert `ListTagsForResourceResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTagsForResourceOutput {
    #[serde(rename = "resourceTags", skip_serializing_if = "Option::is_none")]
    pub resource_tags: Option<ResourceTags>,
}

impl Shape for ListTagsForResourceOutput {
    const SHAPE_NAME: &'static str = "ListTagsForResourceResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("resource_tags", "resourceTags", TypeInfo::Structure("ResourceTags")),
    ];
}

/// AWS Elemental MediaConvert `TagResourceResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagResourceOutput {}

impl Shape for TagResourceOutput {
    const SHAPE_NAME: &'static str = "TagResourceResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

/// AWS Elemental MediaConvert `UntagResourceResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UntagResourceOutput {}

impl Shape for UntagResourceOutput {
    const SHAPE_NAME: &'static str = "UntagResourceResponse";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[];
}

