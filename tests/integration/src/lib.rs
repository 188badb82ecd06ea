//! Cross-crate tests for the autoboto service bindings.
//!
//! These exercise the generated model crates through `autoboto-core`: wire
//! JSON in both directions, enum fallbacks, error conversions and static
//! validation of every bundled service model.
//!
//! ```text
//! cargo test -p autoboto-integration
//! ```

use std::sync::Once;

use autoboto_core::{ServiceModel, Shape};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Every service model under test.
#[must_use]
pub fn all_services() -> [&'static ServiceModel; 2] {
    [
        &autoboto_mediaconvert_model::SERVICE_MODEL,
        &autoboto_waf_model::SERVICE_MODEL,
    ]
}

/// Decode a wire document into shape `T`, panicking with context on failure.
#[must_use]
pub fn from_wire<T: Shape + DeserializeOwned>(json: Value) -> T {
    serde_json::from_value(json)
        .unwrap_or_else(|e| panic!("failed to decode {}: {e}", T::SHAPE_NAME))
}

/// Encode shape `T` as a wire document.
#[must_use]
pub fn to_wire<T: Shape + Serialize>(shape: &T) -> Value {
    serde_json::to_value(shape)
        .unwrap_or_else(|e| panic!("failed to encode {}: {e}", T::SHAPE_NAME))
}

/// Top-level keys of an encoded shape, sorted.
#[must_use]
pub fn wire_keys<T: Shape + Serialize>(shape: &T) -> Vec<String> {
    let mut keys: Vec<String> = match to_wire(shape) {
        Value::Object(map) => map.keys().cloned().collect(),
        other => panic!("{} did not encode as an object: {other}", T::SHAPE_NAME),
    };
    keys.sort();
    keys
}

mod test_errors;
mod test_mediaconvert;
mod test_validation;
mod test_waf;
