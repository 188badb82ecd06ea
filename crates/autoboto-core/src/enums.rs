//! String enums for fields with a fixed set of literal values.
//!
//! Generated enums keep unrecognized values in an `Unknown(String)` variant so
//! that responses carrying values newer than the model still parse. Every
//! enum compares equal to its wire string, which keeps call sites that test
//! against literals readable:
//!
//! ```
//! autoboto_core::shape_enum! {
//!     /// Rate control mode.
//!     pub enum RateControlMode {
//!         Cbr => "CBR",
//!         Vbr => "VBR",
//!     }
//! }
//!
//! assert_eq!(RateControlMode::Cbr, "CBR");
//! assert_eq!(RateControlMode::from("VBR"), RateControlMode::Vbr);
//! assert_eq!(RateControlMode::from("QVBR").as_str(), "QVBR");
//! ```

/// Common interface of every generated string enum.
pub trait ShapeEnum: Sized + From<String> {
    /// Enum name as it appears in the service model.
    const ENUM_NAME: &'static str;

    /// All wire values known to the model, in declaration order.
    const VALUES: &'static [&'static str];

    /// Returns the wire value.
    fn as_str(&self) -> &str;

    /// Returns `false` for values the model does not know.
    fn is_known(&self) -> bool;
}

/// Returns `true` when `value` parses into a known variant of `E` and renders
/// back unchanged.
#[must_use]
pub fn round_trips<E: ShapeEnum>(value: &str) -> bool {
    let parsed = E::from(value.to_owned());
    parsed.is_known() && parsed.as_str() == value
}

/// Define a string enum with an `Unknown(String)` fallback variant.
///
/// Each variant is paired with its wire value. The macro implements
/// `as_str`, `from_known`, `From<&str>`, `From<String>`, `Display`,
/// `PartialEq<str>`, `PartialEq<&str>`, string-based serde and
/// [`ShapeEnum`].
#[macro_export]
macro_rules! shape_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $value:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                $variant,
            )*
            /// A value this model does not know, kept verbatim.
            Unknown(::std::string::String),
        }

        impl $name {
            /// All wire values known to the model, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),*];

            /// Returns the wire value of this variant.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// Parse a wire value, returning `None` for values the model does not know.
            #[must_use]
            pub fn from_known(s: &str) -> ::std::option::Option<Self> {
                match s {
                    $($value => ::std::option::Option::Some(Self::$variant),)*
                    _ => ::std::option::Option::None,
                }
            }

            /// Returns `false` for the `Unknown` variant.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_known(s).unwrap_or_else(|| Self::Unknown(s.to_owned()))
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(s: ::std::string::String) -> Self {
                match Self::from_known(&s) {
                    ::std::option::Option::Some(known) => known,
                    ::std::option::Option::None => Self::Unknown(s),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::cmp::PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl ::std::cmp::PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S: $crate::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let s = <::std::string::String as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                ::std::result::Result::Ok(Self::from(s))
            }
        }

        impl $crate::ShapeEnum for $name {
            const ENUM_NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = $name::VALUES;

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::shape_enum! {
        /// Test enum.
        pub enum H264CodecLevel {
            Auto => "AUTO",
            Level1 => "LEVEL_1",
            Level11 => "LEVEL_1_1",
        }
    }

    #[test]
    fn test_should_compare_equal_to_wire_string() {
        assert_eq!(H264CodecLevel::Level11, "LEVEL_1_1");
        assert_eq!(H264CodecLevel::Auto.as_str(), "AUTO");
        assert_eq!(H264CodecLevel::Level1.to_string(), "LEVEL_1");
    }

    #[test]
    fn test_should_keep_unknown_values_verbatim() {
        let level = H264CodecLevel::from("LEVEL_9");
        assert_eq!(level, H264CodecLevel::Unknown("LEVEL_9".to_owned()));
        assert!(!level.is_known());
        assert_eq!(level, "LEVEL_9");
    }

    #[test]
    fn test_should_serialize_as_plain_string() {
        let json = serde_json::to_string(&H264CodecLevel::Level11).unwrap();
        assert_eq!(json, r#""LEVEL_1_1""#);
        let parsed: H264CodecLevel = serde_json::from_str(r#""AUTO""#).unwrap();
        assert_eq!(parsed, H264CodecLevel::Auto);
        let parsed: H264CodecLevel = serde_json::from_str(r#""NEW""#).unwrap();
        assert_eq!(parsed.as_str(), "NEW");
    }

    #[test]
    fn test_should_round_trip_every_known_value() {
        for value in H264CodecLevel::VALUES {
            assert!(round_trips::<H264CodecLevel>(value), "{value}");
        }
        assert!(!round_trips::<H264CodecLevel>("LEVEL_9"));
        assert_eq!(<H264CodecLevel as ShapeEnum>::ENUM_NAME, "H264CodecLevel");
    }

    fn render<E: ShapeEnum>(value: &E) -> String {
        value.as_str().to_owned()
    }

    #[test]
    fn test_should_render_through_trait_as_str() {
        assert_eq!(render(&H264CodecLevel::Level11), "LEVEL_1_1");
        assert_eq!(render(&H264CodecLevel::from("LEVEL_9")), "LEVEL_9");
        assert_eq!(<H264CodecLevel as ShapeEnum>::VALUES, H264CodecLevel::VALUES);
    }
}
