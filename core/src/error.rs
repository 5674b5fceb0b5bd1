use std::fmt;
use thiserror::Error;

use crate::stack::{ErrorCode, ErrorStack};

/// The error type for placenext operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error (secret key is not valid base64, no default config, ...)
    ConfigInvalid,

    /// The request carries neither `X-PlaceNext-Date` nor `Date`, so it can't be signed
    MissingDate,

    /// Request cannot be signed or sent (bad header value, bad uri, ...)
    RequestInvalid,

    /// A domain validation failed before any request was made
    ///
    /// The source of this error is always an [`ErrorStack`], see [`Error::code`].
    ValidationFailed,

    /// Unexpected errors (network, I/O, decoding, service errors, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable error code if this error was raised from an [`ErrorStack`].
    pub fn code(&self) -> Option<ErrorCode> {
        self.source
            .as_ref()
            .and_then(|src| src.downcast_ref::<ErrorStack>())
            .map(|stack| stack.code())
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a missing date error
    pub fn missing_date() -> Self {
        Self::new(
            ErrorKind::MissingDate,
            "x-placenext-date or date header is not available",
        )
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::MissingDate => write!(f, "missing date"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ValidationFailed => write!(f, "validation failed"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<ErrorStack> for Error {
    fn from(err: ErrorStack) -> Self {
        Self::new(ErrorKind::ValidationFailed, err.to_string()).with_source(err)
    }
}

// Common From implementations
impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_from_error_stack() {
        let err: Error = ErrorStack::new(ErrorCode::INVALID_DATE_RANGE, "invalid date range")
            .stack_after("start and end time both must be given")
            .into();

        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert_eq!(err.code(), Some(ErrorCode::INVALID_DATE_RANGE));
        assert_eq!(
            err.to_string(),
            "code [1]: invalid date range start and end time both must be given"
        );
    }

    #[test]
    fn test_code_absent_on_plain_error() {
        let err = Error::missing_date();
        assert_eq!(err.kind(), ErrorKind::MissingDate);
        assert_eq!(err.code(), None);
    }
}
