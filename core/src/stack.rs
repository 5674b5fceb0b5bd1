//! Chainable errors with a stable numeric code.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Stable numeric code carried by an [`ErrorStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i64);

impl ErrorCode {
    /// The "no code" sentinel, used when a foreign error carries no code.
    pub const NONE: ErrorCode = ErrorCode(0);
    /// The given date range is invalid: end before start, or only one bound given.
    pub const INVALID_DATE_RANGE: ErrorCode = ErrorCode(1);

    /// Create a code from its numeric value.
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the numeric value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ErrorStack is an error with a code and a message that grows as the error
/// travels through layers.
///
/// It renders as `code [N]: message`.
///
/// ```
/// use placenext_core::{ErrorCode, ErrorStack};
///
/// let err = ErrorStack::new(ErrorCode::INVALID_DATE_RANGE, "invalid date range")
///     .stack_after("start and end time both must be given");
/// assert_eq!(
///     err.to_string(),
///     "code [1]: invalid date range start and end time both must be given"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("code [{code}]: {message}")]
pub struct ErrorStack {
    code: ErrorCode,
    message: String,
}

impl ErrorStack {
    /// Create a new error stack.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message without the code prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Append `message` after the current message.
    pub fn stack_after(mut self, message: &str) -> Self {
        self.message.push(' ');
        self.message.push_str(message);
        self
    }

    /// Insert `message` before the current message.
    pub fn stack_before(mut self, message: &str) -> Self {
        self.message = format!("{message} {}", self.message);
        self
    }

    /// Build an error stack from any error.
    ///
    /// The code is taken from the error itself when it is an [`ErrorStack`] or a
    /// [`crate::Error`] raised from one. Otherwise it is recovered from the
    /// `code [N]: message` text, and falls back to [`ErrorCode::NONE`].
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        if let Some(stack) = err.downcast_ref::<ErrorStack>() {
            return stack.clone();
        }
        if let Some(code) = err.downcast_ref::<crate::Error>().and_then(|e| e.code()) {
            let message = err.to_string();
            let message = split_code(&message)
                .map(|(_, rest)| rest.to_string())
                .unwrap_or(message);
            return Self::new(code, message);
        }

        let message = err.to_string();
        match split_code(&message) {
            Some((code, rest)) => Self::new(code, rest),
            None => Self::new(ErrorCode::NONE, message),
        }
    }
}

/// Split `code [N]: message` into its code and message.
fn split_code(s: &str) -> Option<(ErrorCode, &str)> {
    let rest = s.strip_prefix("code [")?;
    let (code, rest) = rest.split_once(']')?;
    let code = code.trim().parse::<i64>().ok()?;
    let rest = rest.strip_prefix(':').unwrap_or(rest).trim_start();
    Some((ErrorCode(code), rest))
}

/// Append `message` to `err`, keeping or recovering its code.
pub fn stack_after<E>(err: E, message: &str) -> ErrorStack
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    into_stack(err.into()).stack_after(message)
}

/// Prepend `message` to `err`, keeping or recovering its code.
pub fn stack_before<E>(err: E, message: &str) -> ErrorStack
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    into_stack(err.into()).stack_before(message)
}

fn into_stack(err: Box<dyn StdError + Send + Sync>) -> ErrorStack {
    match err.downcast::<ErrorStack>() {
        Ok(stack) => *stack,
        Err(err) => ErrorStack::from_error(&*err),
    }
}
