//! Auto-generated from the AWS WAF Smithy model. DO NOT EDIT.

use std::fmt;

use autoboto_core::{ErrorShape, FieldMapping, Shape, TypeInfo};
use serde::{Deserialize, Serialize};

/// AWS WAF `WAFDisallowedNameException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFDisallowedNameException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFDisallowedNameException {
    const SHAPE_NAME: &'static str = "WAFDisallowedNameException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFDisallowedNameException {
    const ERROR_CODE: &'static str = "WAFDisallowedNameException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFInternalErrorException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFInternalErrorException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFInternalErrorException {
    const SHAPE_NAME: &'static str = "WAFInternalErrorException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFInternalErrorException {
    const ERROR_CODE: &'static str = "WAFInternalErrorException";
    const HTTP_STATUS: u16 = 500;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFInvalidAccountException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFInvalidAccountException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFInvalidAccountException {
    const SHAPE_NAME: &'static str = "WAFInvalidAccountException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFInvalidAccountException {
    const ERROR_CODE: &'static str = "WAFInvalidAccountException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFInvalidOperationException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFInvalidOperationException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFInvalidOperationException {
    const SHAPE_NAME: &'static str = "WAFInvalidOperationException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFInvalidOperationException {
    const ERROR_CODE: &'static str = "WAFInvalidOperationException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFInvalidParameterException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFInvalidParameterException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFInvalidParameterException {
    const SHAPE_NAME: &'static str = "WAFInvalidParameterException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFInvalidParameterException {
    const ERROR_CODE: &'static str = "WAFInvalidParameterException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFInvalidPermissionPolicyException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFInvalidPermissionPolicyException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFInvalidPermissionPolicyException {
    const SHAPE_NAME: &'static str = "WAFInvalidPermissionPolicyException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFInvalidPermissionPolicyException {
    const ERROR_CODE: &'static str = "WAFInvalidPermissionPolicyException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFInvalidRegexPatternException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFInvalidRegexPatternException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFInvalidRegexPatternException {
    const SHAPE_NAME: &'static str = "WAFInvalidRegexPatternException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFInvalidRegexPatternException {
    const ERROR_CODE: &'static str = "WAFInvalidRegexPatternException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFLimitsExceededException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFLimitsExceededException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFLimitsExceededException {
    const SHAPE_NAME: &'static str = "WAFLimitsExceededException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFLimitsExceededException {
    const ERROR_CODE: &'static str = "WAFLimitsExceededException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFNonEmptyEntityException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFNonEmptyEntityException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFNonEmptyEntityException {
    const SHAPE_NAME: &'static str = "WAFNonEmptyEntityException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFNonEmptyEntityException {
    const ERROR_CODE: &'static str = "WAFNonEmptyEntityException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFNonexistentContainerException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFNonexistentContainerException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFNonexistentContainerException {
    const SHAPE_NAME: &'static str = "WAFNonexistentContainerException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFNonexistentContainerException {
    const ERROR_CODE: &'static str = "WAFNonexistentContainerException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFNonexistentItemException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFNonexistentItemException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFNonexistentItemException {
    const SHAPE_NAME: &'static str = "WAFNonexistentItemException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFNonexistentItemException {
    const ERROR_CODE: &'static str = "WAFNonexistentItemException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFReferencedItemException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFReferencedItemException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFReferencedItemException {
    const SHAPE_NAME: &'static str = "WAFReferencedItemException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFReferencedItemException {
    const ERROR_CODE: &'static str = "WAFReferencedItemException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFStaleDataException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFStaleDataException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFStaleDataException {
    const SHAPE_NAME: &'static str = "WAFStaleDataException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFStaleDataException {
    const ERROR_CODE: &'static str = "WAFStaleDataException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// AWS WAF `WAFSubscriptionNotFoundException`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WAFSubscriptionNotFoundException {
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Shape for WAFSubscriptionNotFoundException {
    const SHAPE_NAME: &'static str = "WAFSubscriptionNotFoundException";
    const FIELD_MAPPINGS: &'static [FieldMapping] = &[
        FieldMapping::new("message", "message", TypeInfo::String),
    ];
}

impl ErrorShape for WAFSubscriptionNotFoundException {
    const ERROR_CODE: &'static str = "WAFSubscriptionNotFoundException";
    const HTTP_STATUS: u16 = 400;

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Error codes of the AWS WAF service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum WafErrorCode {
    /// Default error code.
    #[default]
    /// WAFDisallowedNameException error.
    WAFDisallowedNameException,
    /// WAFInternalErrorException error.
    WAFInternalErrorException,
    /// WAFInvalidAccountException error.
    WAFInvalidAccountException,
    /// WAFInvalidOperationException error.
    WAFInvalidOperationException,
    /// WAFInvalidParameterException error.
    WAFInvalidParameterException,
    /// WAFInvalidPermissionPolicyException error.
    WAFInvalidPermissionPolicyException,
    /// WAFInvalidRegexPatternException error.
    WAFInvalidRegexPatternException,
    /// WAFLimitsExceededException error.
    WAFLimitsExceededException,
    /// WAFNonEmptyEntityException error.
    WAFNonEmptyEntityException,
    /// WAFNonexistentContainerException error.
    WAFNonexistentContainerException,
    /// WAFNonexistentItemException error.
    WAFNonexistentItemException,
    /// WAFReferencedItemException error.
    WAFReferencedItemException,
    /// WAFStaleDataException error.
    WAFStaleDataException,
    /// WAFSubscriptionNotFoundException error.
    WAFSubscriptionNotFoundException,
}

impl WafErrorCode {
    /// Every error code, in name order.
    pub const ALL: &'static [Self] = &[
        Self::WAFDisallowedNameException,
        Self::WAFInternalErrorException,
        Self::WAFInvalidAccountException,
        Self::WAFInvalidOperationException,
        Self::WAFInvalidParameterException,
        Self::WAFInvalidPermissionPolicyException,
        Self::WAFInvalidRegexPatternException,
        Self::WAFLimitsExceededException,
        Self::WAFNonEmptyEntityException,
        Self::WAFNonexistentContainerException,
        Self::WAFNonexistentItemException,
        Self::WAFReferencedItemException,
        Self::WAFStaleDataException,
        Self::WAFSubscriptionNotFoundException,
    ];

    /// Returns the error code as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WAFDisallowedNameException => "WAFDisallowedNameException",
            Self::WAFInternalErrorException => "WAFInternalErrorException",
            Self::WAFInvalidAccountException => "WAFInvalidAccountException",
            Self::WAFInvalidOperationException => "WAFInvalidOperationException",
            Self::WAFInvalidParameterException => "WAFInvalidParameterException",
            Self::WAFInvalidPermissionPolicyException => "WAFInvalidPermissionPolicyException",
            Self::WAFInvalidRegexPatternException => "WAFInvalidRegexPatternException",
            Self::WAFLimitsExceededException => "WAFLimitsExceededException",
            Self::WAFNonEmptyEntityException => "WAFNonEmptyEntityException",
            Self::WAFNonexistentContainerException => "WAFNonexistentContainerException",
            Self::WAFNonexistentItemException => "WAFNonexistentItemException",
            Self::WAFReferencedItemException => "WAFReferencedItemException",
            Self::WAFStaleDataException => "WAFStaleDataException",
            Self::WAFSubscriptionNotFoundException => "WAFSubscriptionNotFoundException",
        }
    }

    /// Returns the fully qualified shape ID of this error.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::WAFDisallowedNameException => "com.amazonaws.waf#WAFDisallowedNameException",
            Self::WAFInternalErrorException => "com.amazonaws.waf#WAFInternalErrorException",
            Self::WAFInvalidAccountException => "com.amazonaws.waf#WAFInvalidAccountException",
            Self::WAFInvalidOperationException => "com.amazonaws.waf#WAFInvalidOperationException",
            Self::WAFInvalidParameterException => "com.amazonaws.waf#WAFInvalidParameterException",
            Self::WAFInvalidPermissionPolicyException => "com.amazonaws.waf#WAFInvalidPermissionPolicyException",
            Self::WAFInvalidRegexPatternException => "com.amazonaws.waf#WAFInvalidRegexPatternException",
            Self::WAFLimitsExceededException => "com.amazonaws.waf#WAFLimitsExceededException",
            Self::WAFNonEmptyEntityException => "com.amazonaws.waf#WAFNonEmptyEntityException",
            Self::WAFNonexistentContainerException => "com.amazonaws.waf#WAFNonexistentContainerException",
            Self::WAFNonexistentItemException => "com.amazonaws.waf#WAFNonexistentItemException",
            Self::WAFReferencedItemException => "com.amazonaws.waf#WAFReferencedItemException",
            Self::WAFStaleDataException => "com.amazonaws.waf#WAFStaleDataException",
            Self::WAFSubscriptionNotFoundException => "com.amazonaws.waf#WAFSubscriptionNotFoundException",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::WAFDisallowedNameException
            | Self::WAFInvalidAccountException
            | Self::WAFInvalidOperationException
            | Self::WAFInvalidParameterException
            | Self::WAFInvalidPermissionPolicyException
            | Self::WAFInvalidRegexPatternException
            | Self::WAFLimitsExceededException
            | Self::WAFNonEmptyEntityException
            | Self::WAFNonexistentContainerException
            | Self::WAFNonexistentItemException
            | Self::WAFReferencedItemException
            | Self::WAFStaleDataException
            | Self::WAFSubscriptionNotFoundException
            => http::StatusCode::BAD_REQUEST,
            Self::WAFInternalErrorException => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Parse an error code. Accepts `Code`, `namespace#Code` and `Code:detail`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.split_once(':').map_or(code, |(code, _)| code);
        let code = code.rsplit_once('#').map_or(code, |(_, code)| code);
        match code {
            "WAFDisallowedNameException" => Some(Self::WAFDisallowedNameException),
            "WAFInternalErrorException" => Some(Self::WAFInternalErrorException),
            "WAFInvalidAccountException" => Some(Self::WAFInvalidAccountException),
            "WAFInvalidOperationException" => Some(Self::WAFInvalidOperationException),
            "WAFInvalidParameterException" => Some(Self::WAFInvalidParameterException),
            "WAFInvalidPermissionPolicyException" => Some(Self::WAFInvalidPermissionPolicyException),
            "WAFInvalidRegexPatternException" => Some(Self::WAFInvalidRegexPatternException),
            "WAFLimitsExceededException" => Some(Self::WAFLimitsExceededException),
            "WAFNonEmptyEntityException" => Some(Self::WAFNonEmptyEntityException),
            "WAFNonexistentContainerException" => Some(Self::WAFNonexistentContainerException),
            "WAFNonexistentItemException" => Some(Self::WAFNonexistentItemException),
            "WAFReferencedItemException" => Some(Self::WAFReferencedItemException),
            "WAFStaleDataException" => Some(Self::WAFStaleDataException),
            "WAFSubscriptionNotFoundException" => Some(Self::WAFSubscriptionNotFoundException),
            _ => None,
        }
    }
}

impl fmt::Display for WafErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned by the AWS WAF service.
#[derive(Debug)]
pub struct WafError {
    /// The error code.
    pub code: WafErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for WafError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WafError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for WafError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl WafError {
    /// Create a new error from an error code, using the code as message.
    #[must_use]
    pub fn new(code: WafErrorCode) -> Self {
        Self::with_message(code, code.as_str())
    }

    /// Create a new error with a custom message.
    #[must_use]
    pub fn with_message(code: WafErrorCode, message: impl Into<String>) -> Self {
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

impl From<WAFDisallowedNameException> for WafError {
    fn from(err: WAFDisallowedNameException) -> Self {
        let code = WafErrorCode::WAFDisallowedNameException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFInternalErrorException> for WafError {
    fn from(err: WAFInternalErrorException) -> Self {
        let code = WafErrorCode::WAFInternalErrorException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFInvalidAccountException> for WafError {
    fn from(err: WAFInvalidAccountException) -> Self {
        let code = WafErrorCode::WAFInvalidAccountException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFInvalidOperationException> for WafError {
    fn from(err: WAFInvalidOperationException) -> Self {
        let code = WafErrorCode::WAFInvalidOperationException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFInvalidParameterException> for WafError {
    fn from(err: WAFInvalidParameterException) -> Self {
        let code = WafErrorCode::WAFInvalidParameterException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFInvalidPermissionPolicyException> for WafError {
    fn from(err: WAFInvalidPermissionPolicyException) -> Self {
        let code = WafErrorCode::WAFInvalidPermissionPolicyException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFInvalidRegexPatternException> for WafError {
    fn from(err: WAFInvalidRegexPatternException) -> Self {
        let code = WafErrorCode::WAFInvalidRegexPatternException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFLimitsExceededException> for WafError {
    fn from(err: WAFLimitsExceededException) -> Self {
        let code = WafErrorCode::WAFLimitsExceededException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFNonEmptyEntityException> for WafError {
    fn from(err: WAFNonEmptyEntityException) -> Self {
        let code = WafErrorCode::WAFNonEmptyEntityException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFNonexistentContainerException> for WafError {
    fn from(err: WAFNonexistentContainerException) -> Self {
        let code = WafErrorCode::WAFNonexistentContainerException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFNonexistentItemException> for WafError {
    fn from(err: WAFNonexistentItemException) -> Self {
        let code = WafErrorCode::WAFNonexistentItemException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFReferencedItemException> for WafError {
    fn from(err: WAFReferencedItemException) -> Self {
        let code = WafErrorCode::WAFReferencedItemException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFStaleDataException> for WafError {
    fn from(err: WAFStaleDataException) -> Self {
        let code = WafErrorCode::WAFStaleDataException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

impl From<WAFSubscriptionNotFoundException> for WafError {
    fn from(err: WAFSubscriptionNotFoundException) -> Self {
        let code = WafErrorCode::WAFSubscriptionNotFoundException;
        match err.message() {
            Some(message) => Self::with_message(code, message),
            None => Self::new(code),
        }
    }
}

/// Create a `WafError` from an error code.
///
/// # Examples
///
/// ```
/// use autoboto_waf_model::waf_error;
/// use autoboto_waf_model::error::WafErrorCode;
///
/// let err = waf_error!(WAFDisallowedNameException);
/// assert_eq!(err.code, WafErrorCode::WAFDisallowedNameException);
///
/// let err = waf_error!(WAFDisallowedNameException, "custom message");
/// assert_eq!(err.message, "custom message");
/// ```
#[macro_export]
macro_rules! waf_error {
    ($code:ident) => {
        $crate::error::WafError::new($crate::error::WafErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::WafError::with_message($crate::error::WafErrorCode::$code, $msg)
    };
}
