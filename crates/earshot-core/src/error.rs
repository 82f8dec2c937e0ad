//! Error types for the Earshot core library
//!
//! The engine has a deliberately small failure surface: it performs no I/O and
//! accepts any input string, so the only construction-time failure is an
//! unrecognized language tag. Out-of-range severity levels are clamped, never
//! rejected.
//!
//! Copyright (c) 2026 Earshot Team
//! Licensed under the MIT OR Apache-2.0 license

use thiserror::Error;

/// Main error type for Earshot operations
#[derive(Error, Debug)]
pub enum Error {
    /// Engine configuration errors (unrecognized language mode tag)
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
        field: Option<String>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an `InvalidConfiguration` error for a named configuration field
    pub fn invalid_configuration(field: &str, message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_configuration("language", "unknown language tag 'klingon'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: unknown language tag 'klingon'"
        );
    }

    #[test]
    fn test_error_field() {
        let Error::InvalidConfiguration { field, .. } =
            Error::invalid_configuration("language", "bad tag");
        assert_eq!(field.as_deref(), Some("language"));
    }
}
