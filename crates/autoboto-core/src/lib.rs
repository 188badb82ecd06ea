//! Shape runtime for autoboto service bindings.
//!
//! Generated model crates describe every API shape as a plain struct plus a
//! static mapping table pairing each Rust field with its wire name and
//! declared [`TypeInfo`]. This crate provides the pieces those tables plug
//! into: the [`Shape`] and [`ErrorShape`] traits, string enums with an unknown
//! fallback ([`shape_enum!`]), service descriptors, serde helpers for
//! timestamps and blobs, and static validation of the tables.

pub mod blob;
mod enums;
mod error;
pub mod introspect;
mod mapping;
mod model;
mod shape;
pub mod timestamp;
pub mod validate;

pub use enums::{ShapeEnum, round_trips};
pub use error::{AutobotoError, AutobotoResult};
pub use mapping::{FieldMapping, TypeInfo};
pub use model::{
    EnumDescriptor, HttpTrait, OperationDescriptor, Protocol, ServiceModel, ShapeDescriptor,
    ShapeKind, find_service,
};
pub use shape::{ErrorShape, Shape, missing_required};
pub use validate::{ModelIssue, ValidationReport, validate_service};

#[doc(hidden)]
pub use serde;
