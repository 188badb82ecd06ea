//! Error types for the autoboto core.

/// Core error type for shape lookups and model validation.
#[derive(Debug, thiserror::Error)]
pub enum AutobotoError {
    /// No shape with the given name exists in the service model.
    #[error("unknown shape `{shape}` in service `{service}`")]
    UnknownShape {
        /// Service the lookup ran against.
        service: &'static str,
        /// Requested shape name.
        shape: String,
    },

    /// No enum with the given name exists in the service model.
    #[error("unknown enum `{name}` in service `{service}`")]
    UnknownEnum {
        /// Service the lookup ran against.
        service: &'static str,
        /// Requested enum name.
        name: String,
    },

    /// No operation with the given name exists in the service model.
    #[error("unknown operation `{operation}` in service `{service}`")]
    UnknownOperation {
        /// Service the lookup ran against.
        service: &'static str,
        /// Requested operation name.
        operation: String,
    },

    /// No service with the given name is registered.
    #[error("unknown service `{0}`")]
    UnknownService(String),

    /// Static validation of a service model found problems.
    #[error("service model `{service}` failed validation with {issues} issue(s)")]
    InvalidModel {
        /// Service that failed validation.
        service: &'static str,
        /// Number of issues found.
        issues: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for autoboto operations.
pub type AutobotoResult<T> = Result<T, AutobotoError>;
