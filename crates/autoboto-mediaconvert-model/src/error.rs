//! Auto-generated from the AWS Elemental MediaConvert Smithy model. DO NOT EDIT.

use std::fmt;

use autoboto_core::{ErrorShape, FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

/// AWS Elemental MediaConvert `BadRequestException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadRequestException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for BadRequestException {
    const SHAPE_NAME: &'static str = "BadRequestException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for BadRequestException {
    const ERROR_CODE: &'static str = "BadRequestException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS Elemental MediaConvert `ConflictException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for ConflictException {
    const SHAPE_NAME: &'static str = "ConflictException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for ConflictException {
    const ERROR_CODE: &'static str = "ConflictException";
    const HTTP_STATUS: u16 = 409;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS Elemental MediaConvert `ForbiddenException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForbiddenException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for ForbiddenException {
    const SHAPE_NAME: &'static str = "ForbiddenException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for ForbiddenException {
    const ERROR_CODE: &'static str = "ForbiddenException";
    const HTTP_STATUS: u16 = 403;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS Elemental MediaConvert `InternalServerErrorException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalServerErrorException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for InternalServerErrorException {
    const SHAPE_NAME: &'static str = "InternalServerErrorException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for InternalServerErrorException {
    const ERROR_CODE: &'static str = "InternalServerErrorException";
    const HTTP_STATUS: u16 = 500;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS Elemental MediaConvert `NotFoundException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotFoundException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for NotFoundException {
    const SHAPE_NAME: &'static str = "NotFoundException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for NotFoundException {
    const ERROR_CODE: &'static str = "NotFoundException";
    const HTTP_STATUS: u16 = 404;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS Elemental MediaConvert `TooManyRequestsException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooManyRequestsException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for TooManyRequestsException {
    const SHAPE_NAME: &'static str = "TooManyRequestsException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for TooManyRequestsException {
    const ERROR_CODE: &'static str = "TooManyRequestsException";
    const HTTP_STATUS: u16 = 429;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Error codes of the AWS Elemental MediaConvert service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum MediaConvertErrorCode {
    /// Default error code.
    #[default]
    /// BadRequestException error.
    BadRequestException,
    /// ConflictException error.
    ConflictException,
    /// ForbiddenException error.
    ForbiddenException,
    /// InternalServerErrorException error.
    InternalServerErrorException,
    /// NotFoundException error.
    NotFoundException,
    /// TooManyRequestsException error.
    TooManyRequestsException,
}

impl MediaConvertErrorCode {
    /// Every error code, in name order.
    pub const ALL: &'static [Self] = &[
        Self::BadRequestException,
        Self::ConflictException,
        Self::ForbiddenException,
        Self::InternalServerErrorException,
        Self::NotFoundException,
        Self::TooManyRequestsException,
    ];

    /// Returns the error code as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequestException => "BadRequestException",
            Self::ConflictException => "ConflictException",
            Self::ForbiddenException => "ForbiddenException",
            Self::InternalServerErrorException => "InternalServerErrorException",
            Self::NotFoundException => "NotFoundException",
            Self::TooManyRequestsException => "TooManyRequestsException",
        }
    }

    /// Returns the fully qualified shape ID of this error.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::BadRequestException => "com.amazonaws.mediaconvert#BadRequestException",
            Self::ConflictException => "com.amazonaws.mediaconvert#ConflictException",
            Self::ForbiddenException => "com.amazonaws.mediaconvert#ForbiddenException",
            Self::InternalServerErrorException => "com.amazonaws.mediaconvert#InternalServerErrorException",
            Self::NotFoundException => "com.amazonaws.mediaconvert#NotFoundException",
            Self::TooManyRequestsException => "com.amazonaws.mediaconvert#TooManyRequestsException",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::BadRequestException => http::StatusCode::BAD_REQUEST,
            Self::ForbiddenException => http::StatusCode::FORBIDDEN,
            Self::NotFoundException => http::StatusCode::NOT_FOUND,
            Self::ConflictException => http::StatusCode::CONFLICT,
            Self::TooManyRequestsException => http::StatusCode::TOO_MANY_REQUESTS,
            Self::InternalServerErrorException => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Parse an error code. Accepts `Code`, `namespace#Code` and `Code:detail`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.split_once(':').map_or(code, |(code, _)| code);
        let code = code.rsplit_once('#').map_or(code, |(_, code)| code);
        match code {
            "BadRequestException" => Some(Self::BadRequestException),
            "ConflictException" => Some(Self::ConflictException),
            "ForbiddenException" => Some(Self::ForbiddenException),
            "InternalServerErrorException" => Some(Self::InternalServerErrorException),
            "NotFoundException" => Some(Self::NotFoundException),
            "TooManyRequestsException" => Some(Self::TooManyRequestsException),
            _ => None,
        }
    }
}

impl fmt::Display for MediaConvertErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned by the AWS Elemental MediaConvert service.
#[derive(Debug)]
pub struct MediaConvertError {
    /// The error code.
    pub code: MediaConvertErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for MediaConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaConvertError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for MediaConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl MediaConvertError {
    /// Create a new error from an error code, using the code as message.
    #[must_use]
    pub fn new(code: MediaConvertErrorCode) -> Self {
        Self::with_message(code, code.as_str())
    }

    /// Create a new error with a custom message.
    #[must_use]
    pub fn with_message(code: MediaConvertErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the fully qualified shape ID of the error.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        self.code.error_type()
    }
}

impl From<BadRequestException> for MediaConvertError {
    fn from(err: BadRequestException) -> Self {
        let code = MediaConvertErrorCode::BadRequestException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<ConflictException> for MediaConvertError {
    fn from(err: ConflictException) -> Self {
        let code = MediaConvertErrorCode::ConflictException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<ForbiddenException> for MediaConvertError {
    fn from(err: ForbiddenException) -> Self {
        let code = MediaConvertErrorCode::ForbiddenException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<InternalServerErrorException> for MediaConvertError {
    fn from(err: InternalServerErrorException) -> Self {
        let code = MediaConvertErrorCode::InternalServerErrorException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<NotFoundException> for MediaConvertError {
    fn from(err: NotFoundException) -> Self {
        let code = MediaConvertErrorCode::NotFoundException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<TooManyRequestsException> for MediaConvertError {
    fn from(err: TooManyRequestsException) -> Self {
        let code = MediaConvertErrorCode::TooManyRequestsException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

/// Create a `MediaConvertError` from an error code.
///
/// # Examples
///
/// ```
/// use autoboto_mediaconvert_model::mediaconvert_error;
/// use autoboto_mediaconvert_model::error::MediaConvertErrorCode;
///
/// let err = mediaconvert_error!(BadRequestException);
/// assert_eq!(err.code, MediaConvertErrorCode::BadRequestException);
///
/// let err = mediaconvert_error!(BadRequestException, "custom message");
/// assert_eq!(err.message, "custom message");
/// ```
#[macro_export]
macro_rules! mediaconvert_error {
    ($code:ident) => {
        $crate::error::MediaConvertError::new($crate::error::MediaConvertErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::MediaConvertError::with_message($crate::error::MediaConvertErrorCode::$code, $msg)
    };
}
