//! Utility functions and types.

use std::fmt::Debug;

/// Redacts an api key in debug output.
///
/// - Keys shorter than 12 characters are fully hidden.
/// - Longer keys keep their first and last three characters so two keys can
///   still be told apart in logs.
///
/// Counting is done on chars, never on bytes.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.chars().count();
        if length == 0 {
            return f.write_str("EMPTY");
        }
        if length < 12 {
            return f.write_str("***");
        }

        let head: String = self.0.chars().take(3).collect();
        let tail: String = self.0.chars().skip(length - 3).collect();
        write!(f, "{head}***{tail}")
    }
}
