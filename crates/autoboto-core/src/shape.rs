//! Shape traits implemented by every generated structure.

use serde::Serialize;

use crate::mapping::FieldMapping;

/// A named data structure from a service API model.
///
/// The mapping table is static: it has no inputs, no error conditions and no
/// side effects.
pub trait Shape {
    /// Shape name as it appears in the service model.
    const SHAPE_NAME: &'static str;

    /// Mapping table, one entry per declared field.
    const FIELD_MAPPINGS: &'static [FieldMapping];

    /// Returns the mapping table.
    #[must_use]
    fn field_mappings() -> &'static [FieldMapping] {
        Self::FIELD_MAPPINGS
    }

    /// Look up a mapping entry by Rust field name.
    #[must_use]
    fn mapping_for(field: &str) -> Option<&'static FieldMapping> {
        Self::FIELD_MAPPINGS.iter().find(|m| m.field == field)
    }

    /// Look up a mapping entry by wire name.
    #[must_use]
    fn mapping_for_wire(wire_name: &str) -> Option<&'static FieldMapping> {
        Self::FIELD_MAPPINGS.iter().find(|m| m.wire_name == wire_name)
    }
}

/// An exception-shaped structure mirroring a documented error response.
pub trait ErrorShape: Shape {
    /// Error code as sent by the service.
    const ERROR_CODE: &'static str;

    /// HTTP status the service answers with.
    const HTTP_STATUS: u16;

    /// The error message, if the service sent one.
    fn message(&self) -> Option<&str>;
}

/// Returns the wire names of required members that are not set on `shape`.
///
/// Works on the serialized form, where unset members are omitted.
#[must_use]
pub fn missing_required<T: Shape + Serialize>(shape: &T) -> Vec<&'static str> {
    let present = match serde_json::to_value(shape) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    };
    T::FIELD_MAPPINGS
        .iter()
        .filter(|m| m.required && !present.contains_key(m.wire_name))
        .map(|m| m.wire_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::mapping::TypeInfo;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Queue {
        #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    }

    impl Shape for Queue {
        const SHAPE_NAME: &'static str = "Queue";
        const FIELD_MAPPINGS: &'static [FieldMapping] = &[
            FieldMapping::new("name", "name", TypeInfo::String).required(),
            FieldMapping::new("description", "description", TypeInfo::String),
        ];
    }

    #[test]
    fn test_should_find_mapping_by_field_and_wire_name() {
        assert_eq!(Queue::mapping_for("name").map(|m| m.wire_name), Some("name"));
        assert_eq!(
            Queue::mapping_for_wire("description").map(|m| m.field),
            Some("description")
        );
        assert!(Queue::mapping_for("missing").is_none());
    }

    #[test]
    fn test_should_report_missing_required_members() {
        let queue = Queue::default();
        assert_eq!(missing_required(&queue), vec!["name"]);

        let queue = Queue {
            name: Some("Default".to_owned()),
            ..Default::default()
        };
        assert!(missing_required(&queue).is_empty());
    }
}
