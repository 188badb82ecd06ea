//! Serde helpers for blob members, which JSON protocols send as base64.

/// `#[serde(with = ...)]` module for `Option<Bytes>` members.
pub mod base64_option {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serialize as a standard base64 string.
    pub fn serialize<S: Serializer>(
        value: &Option<Bytes>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(data) => serializer.serialize_str(&STANDARD.encode(data)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a standard base64 string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        let Some(encoded) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        STANDARD
            .decode(encoded.as_bytes())
            .map(|decoded| Some(Bytes::from(decoded)))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ByteMatch {
        #[serde(
            rename = "TargetString",
            default,
            with = "super::base64_option",
            skip_serializing_if = "Option::is_none"
        )]
        target_string: Option<Bytes>,
    }

    #[test]
    fn test_should_encode_and_decode_base64() {
        let m = ByteMatch {
            target_string: Some(Bytes::from_static(b"badrefer1")),
        };
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"TargetString":"YmFkcmVmZXIx"}"#);
        let parsed: ByteMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn test_should_reject_invalid_base64() {
        let result: Result<ByteMatch, _> = serde_json::from_str(r#"{"TargetString":"***"}"#);
        assert!(result.is_err());
    }
}
