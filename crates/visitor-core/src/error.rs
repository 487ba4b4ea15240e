//! Shared error type across visitor crates.

use thiserror::Error;

/// Stable error codes used in logs and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Storage backend failed.
    Storage,
    /// Stored attribute could not be read as an integer.
    InvalidNumber,
    /// Invalid configuration.
    Config,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Storage => "STORAGE",
            ErrorCode::InvalidNumber => "INVALID_NUMBER",
            ErrorCode::Config => "CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VisitorError>;

/// Unified error type used by core and gateway.
///
/// The `Display` text is what the counter endpoint returns in its
/// `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum VisitorError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl VisitorError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            VisitorError::Storage(_) => ErrorCode::Storage,
            VisitorError::InvalidNumber(_) => ErrorCode::InvalidNumber,
            VisitorError::Config(_) => ErrorCode::Config,
            VisitorError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            VisitorError::Internal(_) => ErrorCode::Internal,
        }
    }
}
