//! The subset of the Smithy 2.0 JSON AST the generator reads.
//!
//! Keys the generator does not use are ignored during parsing.

use std::collections::HashMap;

use serde::Deserialize;

/// Trait map of a shape or member, keyed by trait shape ID.
pub type Traits = HashMap<String, serde_json::Value>;

/// Parsed model file.
#[derive(Debug, Deserialize)]
pub struct SmithyModel {
    /// AST format version.
    pub smithy: String,
    /// Shapes keyed by absolute shape ID (`namespace#Name`).
    pub shapes: HashMap<String, Shape>,
}

/// One shape, discriminated by its `type` key.
///
/// Scalars only carry traits. Service, resource and big-number shapes are
/// parsed so the document loads but never become member types.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    Structure(AggregateShape),
    Union(AggregateShape),
    Enum(AggregateShape),
    Operation(OperationShape),
    List(ListShape),
    Map(MapShape),
    String(ScalarShape),
    Boolean(ScalarShape),
    Byte(ScalarShape),
    Short(ScalarShape),
    Integer(ScalarShape),
    IntEnum(ScalarShape),
    Long(ScalarShape),
    Float(ScalarShape),
    Double(ScalarShape),
    BigInteger(ScalarShape),
    BigDecimal(ScalarShape),
    Timestamp(ScalarShape),
    Blob(ScalarShape),
    Document(ScalarShape),
    Service(ScalarShape),
    Resource(ScalarShape),
}

/// A shape with no members of its own.
#[derive(Debug, Default, Deserialize)]
pub struct ScalarShape {
    #[serde(default)]
    pub traits: Traits,
}

/// A structure, union or string enum: named members plus traits.
#[derive(Debug, Deserialize)]
pub struct AggregateShape {
    #[serde(default)]
    pub members: HashMap<String, MemberShape>,
    #[serde(default)]
    pub traits: Traits,
}

/// A member of an aggregate shape.
#[derive(Debug, Deserialize)]
pub struct MemberShape {
    /// Absolute ID of the member's type.
    pub target: String,
    #[serde(default)]
    pub traits: Traits,
}

/// An operation and the shapes it exchanges.
#[derive(Debug, Deserialize)]
pub struct OperationShape {
    pub input: Option<ShapeRef>,
    pub output: Option<ShapeRef>,
    #[serde(default)]
    pub errors: Vec<ShapeRef>,
    #[serde(default)]
    pub traits: Traits,
}

/// `{ "target": "..." }`.
#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    pub target: String,
}

/// A list of one member type.
#[derive(Debug, Deserialize)]
pub struct ListShape {
    pub member: ShapeRef,
    #[serde(default)]
    pub traits: Traits,
}

/// A map from key type to value type.
#[derive(Debug, Deserialize)]
pub struct MapShape {
    pub key: ShapeRef,
    pub value: ShapeRef,
    #[serde(default)]
    pub traits: Traits,
}

impl SmithyModel {
    /// Strip the namespace: `com.amazonaws.waf#WebACL` becomes `WebACL`.
    pub fn short_name(shape_id: &str) -> &str {
        shape_id.rsplit_once('#').map_or(shape_id, |(_, name)| name)
    }
}

impl MemberShape {
    /// The member's `@jsonName`, if any.
    pub fn json_name(&self) -> Option<&str> {
        self.traits
            .get("smithy.api#jsonName")
            .and_then(serde_json::Value::as_str)
    }

    /// Whether the member carries `@required`.
    pub fn is_required(&self) -> bool {
        self.traits.contains_key("smithy.api#required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_operation_errors_and_member_traits() {
        let json = r#"{
            "smithy": "2.0",
            "shapes": {
                "com.amazonaws.mediaconvert#GetQueue": {
                    "type": "operation",
                    "input": { "target": "com.amazonaws.mediaconvert#GetQueueRequest" },
                    "output": { "target": "com.amazonaws.mediaconvert#GetQueueResponse" },
                    "errors": [{ "target": "com.amazonaws.mediaconvert#NotFoundException" }],
                    "traits": { "smithy.api#http": { "method": "GET", "uri": "/2017-08-29/queues/{Name}", "code": 200 } }
                },
                "com.amazonaws.mediaconvert#GetQueueRequest": {
                    "type": "structure",
                    "members": {
                        "Name": {
                            "target": "smithy.api#String",
                            "traits": {
                                "smithy.api#httpLabel": {},
                                "smithy.api#jsonName": "name",
                                "smithy.api#required": {}
                            }
                        }
                    }
                },
                "com.amazonaws.mediaconvert#Metadata": { "type": "document" }
            }
        }"#;
        let model: SmithyModel = serde_json::from_str(json).unwrap();
        let Some(Shape::Operation(op)) = model.shapes.get("com.amazonaws.mediaconvert#GetQueue")
        else {
            panic!("expected operation");
        };
        assert_eq!(op.errors.len(), 1);
        assert_eq!(
            SmithyModel::short_name(&op.errors[0].target),
            "NotFoundException"
        );

        let Some(Shape::Structure(input)) =
            model.shapes.get("com.amazonaws.mediaconvert#GetQueueRequest")
        else {
            panic!("expected structure");
        };
        let name = &input.members["Name"];
        assert_eq!(name.json_name(), Some("name"));
        assert!(name.is_required());
    }
}
