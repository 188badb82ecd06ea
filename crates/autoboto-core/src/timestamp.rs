//! Serde helpers for timestamp members.
//!
//! JSON protocols send timestamps as (possibly fractional) epoch seconds.
//! Precision is milliseconds: anything finer is truncated on serialization,
//! and fractional input is rounded to the nearest millisecond.

/// `#[serde(with = ...)]` module for `Option<DateTime<Utc>>` members.
pub mod epoch_seconds_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serialize as epoch seconds, keeping millisecond precision.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => {
                let millis = ts.timestamp_millis();
                if millis % 1000 == 0 {
                    serializer.serialize_i64(ts.timestamp())
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let seconds = millis as f64 / 1000.0;
                    serializer.serialize_f64(seconds)
                }
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from an integer or fractional number of epoch seconds.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if !seconds.is_finite() {
            return Err(de::Error::custom("timestamp must be a finite number"));
        }
        #[allow(clippy::cast_possible_truncation)]
        let millis = (seconds * 1000.0).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Timing {
        #[serde(
            rename = "submitTime",
            default,
            with = "super::epoch_seconds_option",
            skip_serializing_if = "Option::is_none"
        )]
        submit_time: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_should_parse_integer_and_fractional_seconds() {
        let t: Timing = serde_json::from_str(r#"{"submitTime":1700000000}"#).unwrap();
        assert_eq!(
            t.submit_time,
            Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
        );

        let t: Timing = serde_json::from_str(r#"{"submitTime":1700000000.25}"#).unwrap();
        assert_eq!(
            t.submit_time.map(|ts| ts.timestamp_millis()),
            Some(1_700_000_000_250)
        );
    }

    #[test]
    fn test_should_truncate_below_millisecond_precision() {
        let t = Timing {
            submit_time: Some(Utc.timestamp_opt(5, 123_456).unwrap()),
        };
        assert_eq!(serde_json::to_string(&t).unwrap(), r#"{"submitTime":5}"#);

        let t = Timing {
            submit_time: Some(Utc.timestamp_opt(5, 250_900_000).unwrap()),
        };
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"submitTime":5.25}"#);
        let parsed: Timing = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.submit_time.map(|ts| ts.timestamp_millis()),
            Some(5_250)
        );
    }

    #[test]
    fn test_should_treat_missing_and_null_as_unset() {
        let t: Timing = serde_json::from_str("{}").unwrap();
        assert!(t.submit_time.is_none());
        let t: Timing = serde_json::from_str(r#"{"submitTime":null}"#).unwrap();
        assert!(t.submit_time.is_none());
        assert_eq!(serde_json::to_string(&t).unwrap(), "{}");
    }

    #[test]
    fn test_should_serialize_whole_seconds_as_integer() {
        let t = Timing {
            submit_time: Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
        };
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"submitTime":1700000000}"#
        );
    }
}
