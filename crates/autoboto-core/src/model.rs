//! Static descriptors of a service API model.
//!
//! A generated model crate exposes one [`ServiceModel`] listing every shape,
//! enum and operation it defines. Descriptors are `const`-constructible so the
//! whole table lives in a `static`.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::enums::{ShapeEnum, round_trips};
use crate::error::{AutobotoError, AutobotoResult};
use crate::introspect::declared_wire_fields;
use crate::mapping::FieldMapping;
use crate::shape::Shape;

/// Wire protocol a service speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// REST with JSON bodies (`aws.protocols#restJson1`).
    RestJson1,
    /// JSON RPC 1.0 over `POST /` (`aws.protocols#awsJson1_0`).
    AwsJson1_0,
    /// JSON RPC 1.1 over `POST /` (`aws.protocols#awsJson1_1`).
    AwsJson1_1,
    /// REST with XML bodies (`aws.protocols#restXml`).
    RestXml,
    /// Query string requests with XML responses (`aws.protocols#awsQuery`).
    AwsQuery,
}

impl Protocol {
    /// Returns the Smithy protocol trait name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestJson1 => "restJson1",
            Self::AwsJson1_0 => "awsJson1_0",
            Self::AwsJson1_1 => "awsJson1_1",
            Self::RestXml => "restXml",
            Self::AwsQuery => "awsQuery",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a structure plays in the service model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Top-level operation input.
    Input,
    /// Top-level operation output.
    Output,
    /// Nested structure shared by inputs and outputs.
    Structure,
    /// Exception-shaped error response.
    Error,
}

impl ShapeKind {
    /// Returns the lowercase kind name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Structure => "structure",
            Self::Error => "error",
        }
    }

    /// Parse a lowercase kind name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "input" => Some(Self::Input),
            "output" => Some(Self::Output),
            "structure" => Some(Self::Structure),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of one generated structure.
#[derive(Clone, Copy)]
pub struct ShapeDescriptor {
    /// Shape name in the service model.
    pub name: &'static str,
    /// Role of the shape.
    pub kind: ShapeKind,
    /// Mapping table.
    pub fields: &'static [FieldMapping],
    declared: fn() -> &'static [&'static str],
}

impl ShapeDescriptor {
    /// Describe shape `T`.
    #[must_use]
    pub const fn of<T: Shape + DeserializeOwned>(kind: ShapeKind) -> Self {
        Self {
            name: T::SHAPE_NAME,
            kind,
            fields: T::FIELD_MAPPINGS,
            declared: declared_wire_fields::<T>,
        }
    }

    /// Wire names the Rust struct actually declares.
    #[must_use]
    pub fn declared_wire_fields(&self) -> &'static [&'static str] {
        (self.declared)()
    }

    /// Look up a mapping entry by Rust field name or wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldMapping> {
        self.fields
            .iter()
            .find(|m| m.field == name || m.wire_name == name)
    }
}

impl fmt::Debug for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("fields", &self.fields.len())
            .finish_non_exhaustive()
    }
}

/// Descriptor of one generated string enum.
#[derive(Clone, Copy)]
pub struct EnumDescriptor {
    /// Enum name in the service model.
    pub name: &'static str,
    /// Known wire values.
    pub values: &'static [&'static str],
    round_trip: fn(&str) -> bool,
}

impl EnumDescriptor {
    /// Describe enum `E`.
    #[must_use]
    pub const fn of<E: ShapeEnum>() -> Self {
        Self {
            name: E::ENUM_NAME,
            values: E::VALUES,
            round_trip: round_trips::<E>,
        }
    }

    /// Returns `true` when `value` parses to a known variant and renders back
    /// unchanged.
    #[must_use]
    pub fn round_trips(&self, value: &str) -> bool {
        (self.round_trip)(value)
    }

    /// Returns `true` when `value` is one of the known values.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

impl fmt::Debug for EnumDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDescriptor")
            .field("name", &self.name)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

/// HTTP binding of a REST operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTrait {
    /// HTTP method.
    pub method: &'static str,
    /// URI template, labels in braces.
    pub uri: &'static str,
    /// Success status code.
    pub code: u16,
}

/// Descriptor of one operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    /// Operation name.
    pub name: &'static str,
    /// Input shape name.
    pub input: Option<&'static str>,
    /// Output shape name.
    pub output: Option<&'static str>,
    /// Error shape names.
    pub errors: &'static [&'static str],
    /// HTTP binding, for REST protocols.
    pub http: Option<HttpTrait>,
}

/// Everything a generated model crate knows about its service.
#[derive(Debug)]
pub struct ServiceModel {
    /// Short service name (e.g. `mediaconvert`).
    pub name: &'static str,
    /// Human-readable service title.
    pub title: &'static str,
    /// API version string.
    pub api_version: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// `X-Amz-Target` prefix for JSON RPC protocols.
    pub target_prefix: Option<&'static str>,
    /// All structures.
    pub shapes: &'static [ShapeDescriptor],
    /// All string enums.
    pub enums: &'static [EnumDescriptor],
    /// All operations.
    pub operations: &'static [OperationDescriptor],
}

impl ServiceModel {
    /// Look up a shape by model name.
    #[must_use]
    pub fn shape(&self, name: &str) -> Option<&'static ShapeDescriptor> {
        self.shapes.iter().find(|s| s.name == name)
    }

    /// Look up a shape by model name, failing with [`AutobotoError::UnknownShape`].
    pub fn require_shape(&self, name: &str) -> AutobotoResult<&'static ShapeDescriptor> {
        self.shape(name).ok_or_else(|| AutobotoError::UnknownShape {
            service: self.name,
            shape: name.to_owned(),
        })
    }

    /// Look up an enum by model name.
    #[must_use]
    pub fn enumeration(&self, name: &str) -> Option<&'static EnumDescriptor> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Look up an enum by model name, failing with [`AutobotoError::UnknownEnum`].
    pub fn require_enumeration(&self, name: &str) -> AutobotoResult<&'static EnumDescriptor> {
        self.enumeration(name)
            .ok_or_else(|| AutobotoError::UnknownEnum {
                service: self.name,
                name: name.to_owned(),
            })
    }

    /// Look up an operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&'static OperationDescriptor> {
        self.operations.iter().find(|o| o.name == name)
    }

    /// Look up an operation by name, failing with [`AutobotoError::UnknownOperation`].
    pub fn require_operation(&self, name: &str) -> AutobotoResult<&'static OperationDescriptor> {
        self.operation(name)
            .ok_or_else(|| AutobotoError::UnknownOperation {
                service: self.name,
                operation: name.to_owned(),
            })
    }

    /// Iterate over shapes of one kind.
    pub fn shapes_of_kind(
        &self,
        kind: ShapeKind,
    ) -> impl Iterator<Item = &'static ShapeDescriptor> {
        self.shapes.iter().filter(move |s| s.kind == kind)
    }

    /// Iterate over error shapes.
    pub fn errors(&self) -> impl Iterator<Item = &'static ShapeDescriptor> {
        self.shapes_of_kind(ShapeKind::Error)
    }
}

/// Find a service by name among `services`.
pub fn find_service<'a>(
    services: &[&'a ServiceModel],
    name: &str,
) -> AutobotoResult<&'a ServiceModel> {
    services
        .iter()
        .copied()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| AutobotoError::UnknownService(name.to_owned()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! A tiny hand-written service used by unit tests.

    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::mapping::TypeInfo;
    use crate::shape::ErrorShape;

    crate::shape_enum! {
        /// Queue status.
        pub enum QueueStatus {
            Active => "ACTIVE",
            Paused => "PAUSED",
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Queue {
        #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
        pub status: Option<QueueStatus>,
    }

    impl Shape for Queue {
        const SHAPE_NAME: &'static str = "Queue";
        const FIELD_MAPPINGS: &'static [FieldMapping] = &[
            FieldMapping::new("name", "name", TypeInfo::String),
            FieldMapping::new("status", "status", TypeInfo::Enum("QueueStatus")),
        ];
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GetQueueRequest {
        #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
    }

    impl Shape for GetQueueRequest {
        const SHAPE_NAME: &'static str = "GetQueueRequest";
        const FIELD_MAPPINGS: &'static [FieldMapping] =
            &[FieldMapping::new("name", "name", TypeInfo::String).required()];
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GetQueueResponse {
        #[serde(rename = "queue", skip_serializing_if = "Option::is_none")]
        pub queue: Option<Queue>,
    }

    impl Shape for GetQueueResponse {
        const SHAPE_NAME: &'static str = "GetQueueResponse";
        const FIELD_MAPPINGS: &'static [FieldMapping] =
            &[FieldMapping::new("queue", "queue", TypeInfo::Structure("Queue"))];
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct NotFoundException {
        #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
        pub message: Option<String>,
    }

    impl Shape for NotFoundException {
        const SHAPE_NAME: &'static str = "NotFoundException";
        const FIELD_MAPPINGS: &'static [FieldMapping] =
            &[FieldMapping::new("message", "message", TypeInfo::String)];
    }

    impl ErrorShape for NotFoundException {
        const ERROR_CODE: &'static str = "NotFoundException";
        const HTTP_STATUS: u16 = 404;

        fn message(&self) -> Option<&str> {
            self.message.as_deref()
        }
    }

    pub static SERVICE: ServiceModel = ServiceModel {
        name: "queues",
        title: "Queue Service",
        api_version: "2017-08-29",
        protocol: Protocol::RestJson1,
        target_prefix: None,
        shapes: &[
            ShapeDescriptor::of::<Queue>(ShapeKind::Structure),
            ShapeDescriptor::of::<GetQueueRequest>(ShapeKind::Input),
            ShapeDescriptor::of::<GetQueueResponse>(ShapeKind::Output),
            ShapeDescriptor::of::<NotFoundException>(ShapeKind::Error),
        ],
        enums: &[EnumDescriptor::of::<QueueStatus>()],
        operations: &[OperationDescriptor {
            name: "GetQueue",
            input: Some("GetQueueRequest"),
            output: Some("GetQueueResponse"),
            errors: &["NotFoundException"],
            http: Some(HttpTrait {
                method: "GET",
                uri: "/2017-08-29/queues/{Name}",
                code: 200,
            }),
        }],
    };
}

#[cfg(test)]
mod tests {
    use super::fixtures::SERVICE;
    use super::*;

    #[test]
    fn test_should_look_up_shapes_enums_and_operations() {
        assert_eq!(SERVICE.shape("Queue").map(|s| s.kind), Some(ShapeKind::Structure));
        assert!(SERVICE.shape("Missing").is_none());
        assert_eq!(
            SERVICE.enumeration("QueueStatus").map(|e| e.values),
            Some(&["ACTIVE", "PAUSED"][..])
        );
        let op = SERVICE.require_operation("GetQueue").unwrap();
        assert_eq!(op.http.map(|h| h.method), Some("GET"));
    }

    #[test]
    fn test_should_fail_unknown_lookups_with_typed_errors() {
        let err = SERVICE.require_shape("Nope").unwrap_err();
        assert!(matches!(err, AutobotoError::UnknownShape { ref shape, .. } if shape == "Nope"));
        assert!(SERVICE.require_enumeration("Nope").is_err());
        assert!(SERVICE.require_operation("Nope").is_err());
    }

    #[test]
    fn test_should_introspect_declared_fields_through_descriptor() {
        let queue = SERVICE.shape("Queue").unwrap();
        assert_eq!(queue.declared_wire_fields(), &["name", "status"]);
        assert_eq!(queue.field("status").map(|m| m.field), Some("status"));
    }

    #[test]
    fn test_should_filter_shapes_by_kind() {
        let errors: Vec<_> = SERVICE.errors().map(|s| s.name).collect();
        assert_eq!(errors, vec!["NotFoundException"]);
        assert_eq!(SERVICE.shapes_of_kind(ShapeKind::Input).count(), 1);
    }

    #[test]
    fn test_should_find_service_case_insensitively() {
        let services = [&SERVICE];
        assert_eq!(find_service(&services, "QUEUES").unwrap().name, "queues");
        assert!(matches!(
            find_service(&services, "s3"),
            Err(AutobotoError::UnknownService(_))
        ));
    }

    #[test]
    fn test_should_parse_shape_kind_names() {
        assert_eq!(ShapeKind::from_name("error"), Some(ShapeKind::Error));
        assert_eq!(ShapeKind::from_name("bogus"), None);
        assert_eq!(Protocol::AwsJson1_1.to_string(), "awsJson1_1");
    }
}
