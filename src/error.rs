//! Error types for wrapkit
//!
//! This module defines the error hierarchy for the whole crate.
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for wrapkit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// A formatter was requested before one was configured
    #[error("wrapkit formatter is not configured; call configure() with a formatter at startup")]
    FormatterNotConfigured,

    /// A metadata calculator was requested but pagination was never enabled
    #[error("wrapkit pagination is not configured; enable it via Options::use_pagination() at startup")]
    PaginationNotConfigured,

    /// Other configuration/wiring failure
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// A handler payload could not be serialized to JSON
    #[error("Failed to serialize response payload: {0}")]
    Serialize(#[from] serde_json::Error),

    // ============================================================================
    // Paged Source Errors
    // ============================================================================
    /// A remote paged source failed during fetch or count
    #[error("Paged source error: {message}")]
    Source {
        /// Human-readable description
        message: String,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a paged source error
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Check if this error indicates a startup/wiring defect rather than a
    /// request-specific condition
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::FormatterNotConfigured | Error::PaginationNotConfigured | Error::Config { .. }
        )
    }
}

/// Result type alias for wrapkit
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::source("count failed");
        assert_eq!(err.to_string(), "Paged source error: count failed");
    }

    #[test]
    fn test_unconfigured_messages_are_distinct() {
        let formatter = Error::FormatterNotConfigured.to_string();
        let pagination = Error::PaginationNotConfigured.to_string();
        assert_ne!(formatter, pagination);
        assert!(formatter.contains("formatter"));
        assert!(pagination.contains("pagination"));
    }

    #[test]
    fn test_is_configuration() {
        assert!(Error::FormatterNotConfigured.is_configuration());
        assert!(Error::PaginationNotConfigured.is_configuration());
        assert!(Error::config("bad wiring").is_configuration());
        assert!(!Error::source("remote down").is_configuration());
    }
}
