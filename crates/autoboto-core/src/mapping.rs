//! Field mappings between Rust struct fields and service wire names.
//!
//! Every generated shape carries a static table of [`FieldMapping`] entries.
//! Each entry pairs the Rust field name with the name the remote API uses on
//! the wire and a [`TypeInfo`] describing the declared type.

use std::fmt;

/// Declared type of a shape member.
///
/// `Enum` is a union of the named enum and a plain string: services may return
/// values newer than the model, and the generated enums keep those verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeInfo {
    /// A UTF-8 string.
    String,
    /// A boolean.
    Boolean,
    /// A 32-bit signed integer.
    Integer,
    /// A 64-bit signed integer.
    Long,
    /// A 32-bit float.
    Float,
    /// A 64-bit float.
    Double,
    /// A point in time, epoch seconds on the wire.
    Timestamp,
    /// Binary data, base64 on the wire.
    Blob,
    /// An untyped JSON document.
    Document,
    /// A named string enum (enum-or-string).
    Enum(&'static str),
    /// A named structure shape.
    Structure(&'static str),
    /// A list of the inner type.
    List(&'static TypeInfo),
    /// A map from key type to value type.
    Map(&'static TypeInfo, &'static TypeInfo),
}

impl TypeInfo {
    /// Returns the named shape or enum this type ultimately refers to.
    ///
    /// Lists are looked through to their element, maps to their value.
    #[must_use]
    pub fn referenced_name(&self) -> Option<&'static str> {
        match self {
            Self::Enum(name) | Self::Structure(name) => Some(name),
            Self::List(inner) | Self::Map(_, inner) => inner.referenced_name(),
            _ => None,
        }
    }

    /// Returns every named reference inside this type, map keys included.
    #[must_use]
    pub fn references(&self) -> Vec<TypeInfo> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references(&self, out: &mut Vec<TypeInfo>) {
        match self {
            Self::Enum(_) | Self::Structure(_) => out.push(*self),
            Self::List(inner) => inner.collect_references(out),
            Self::Map(key, value) => {
                key.collect_references(out);
                value.collect_references(out);
            }
            _ => {}
        }
    }

    /// Returns `true` for the enum-or-string union.
    #[must_use]
    pub fn is_enum_or_string(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns `true` for lists and maps.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(..))
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Boolean => f.write_str("bool"),
            Self::Integer => f.write_str("i32"),
            Self::Long => f.write_str("i64"),
            Self::Float => f.write_str("f32"),
            Self::Double => f.write_str("f64"),
            Self::Timestamp => f.write_str("DateTime<Utc>"),
            Self::Blob => f.write_str("Bytes"),
            Self::Document => f.write_str("Value"),
            Self::Enum(name) | Self::Structure(name) => f.write_str(name),
            Self::List(inner) => write!(f, "Vec<{inner}>"),
            Self::Map(key, value) => write!(f, "HashMap<{key}, {value}>"),
        }
    }
}

/// One entry of a shape's mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldMapping {
    /// Rust field name (snake_case, without any `r#` prefix).
    pub field: &'static str,
    /// Member name as serialized on the wire.
    pub wire_name: &'static str,
    /// Declared type of the member.
    pub type_info: TypeInfo,
    /// Whether the service model marks the member as required.
    pub required: bool,
}

impl FieldMapping {
    /// Create an optional mapping entry.
    #[must_use]
    pub const fn new(field: &'static str, wire_name: &'static str, type_info: TypeInfo) -> Self {
        Self {
            field,
            wire_name,
            type_info,
            required: false,
        }
    }

    /// Mark the entry as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_render_nested_types() {
        let ty = TypeInfo::Map(&TypeInfo::String, &TypeInfo::Structure("AudioSelector"));
        assert_eq!(ty.to_string(), "HashMap<String, AudioSelector>");
        let ty = TypeInfo::List(&TypeInfo::List(&TypeInfo::Integer));
        assert_eq!(ty.to_string(), "Vec<Vec<i32>>");
    }

    #[test]
    fn test_should_look_through_collections_for_references() {
        let ty = TypeInfo::List(&TypeInfo::Enum("HlsAdMarkers"));
        assert_eq!(ty.referenced_name(), Some("HlsAdMarkers"));
        assert!(TypeInfo::Integer.referenced_name().is_none());
        let ty = TypeInfo::Map(&TypeInfo::Enum("Key"), &TypeInfo::Structure("Value"));
        assert_eq!(
            ty.references(),
            vec![TypeInfo::Enum("Key"), TypeInfo::Structure("Value")]
        );
    }

    #[test]
    fn test_should_build_const_mappings() {
        const MAPPINGS: &[FieldMapping] = &[
            FieldMapping::new("name", "Name", TypeInfo::String).required(),
            FieldMapping::new("tags", "Tags", TypeInfo::List(&TypeInfo::Structure("Tag"))),
        ];
        assert!(MAPPINGS[0].required);
        assert!(!MAPPINGS[1].required);
        assert!(MAPPINGS[1].type_info.is_collection());
    }
}
