//! Error types for the text-generation gateway.

use thiserror::Error;

/// Main error type for the gateway pipeline.
///
/// Only `MissingText` is visible to callers; every other variant collapses
/// into the generic internal-error response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The request body has no usable `text` field
    #[error("Missing 'text' field in request body")]
    MissingText,

    /// The inbound body could not be read as a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The remote model call failed
    #[error("Invocation error: {0}")]
    InvocationError(String),

    /// The remote model answered with something other than a Titan result
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    /// Whether this error is the caller's fault rather than ours.
    pub fn is_validation(&self) -> bool {
        matches!(self, GatewayError::MissingText)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::SerializationError(describe_json_error(&err))
    }
}

/// Describe a JSON error by category and position only.
///
/// serde's own message can quote the offending value, which may be caller
/// or model text that must not reach the logs.
pub fn describe_json_error(err: &serde_json::Error) -> String {
    let category = match err.classify() {
        serde_json::error::Category::Io => "I/O error",
        serde_json::error::Category::Syntax => "syntax error",
        serde_json::error::Category::Data => "unexpected data",
        serde_json::error::Category::Eof => "unexpected end of input",
    };
    format!("{} at line {} column {}", category, err.line(), err.column())
}
