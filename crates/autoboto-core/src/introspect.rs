//! Read the serialized field names a struct declares from its derived
//! `Deserialize` implementation, without any input data.
//!
//! Derived struct deserializers hand their field list to
//! `Deserializer::deserialize_struct`. [`FieldNameProbe`] records that list and
//! then aborts.

use std::fmt;

use serde::de::{self, DeserializeOwned, Visitor};
use serde::forward_to_deserialize_any;

/// Returns the wire names a struct declares, renames applied.
///
/// Returns an empty slice for types that do not deserialize as a struct.
#[must_use]
pub fn declared_wire_fields<T: DeserializeOwned>() -> &'static [&'static str] {
    let mut probe = FieldNameProbe::default();
    // The probe always errors once it has seen the field list.
    let _ = T::deserialize(&mut probe);
    probe.fields.unwrap_or(&[])
}

#[derive(Debug, Default)]
struct FieldNameProbe {
    fields: Option<&'static [&'static str]>,
}

#[derive(Debug)]
struct ProbeFinished;

impl fmt::Display for ProbeFinished {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("field name probe finished")
    }
}

impl std::error::Error for ProbeFinished {}

impl de::Error for ProbeFinished {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        Self
    }
}

impl<'de> de::Deserializer<'de> for &mut FieldNameProbe {
    type Error = ProbeFinished;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Self::Error> {
        Err(ProbeFinished)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.fields = Some(fields);
        Err(ProbeFinished)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Predicate {
        #[serde(rename = "Negated")]
        negated: Option<bool>,
        #[serde(rename = "Type")]
        r#type: Option<String>,
        #[serde(rename = "DataId")]
        data_id: Option<String>,
    }

    #[test]
    fn test_should_list_renamed_fields() {
        assert_eq!(
            declared_wire_fields::<Predicate>(),
            &["Negated", "Type", "DataId"]
        );
    }

    #[test]
    fn test_should_return_empty_for_non_structs() {
        assert!(declared_wire_fields::<String>().is_empty());
        assert!(declared_wire_fields::<Vec<u8>>().is_empty());
    }
}
