//! Error types for SQL fragment generation.
//!
//! Generation itself only fails on invalid input. Configuration adds the
//! remaining variants, raised while selecting a dialect.

use thiserror::Error;

/// Domain-specific errors for SQL fragment generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlGenError {
    /// An argument violated a precondition (e.g. an empty identifier).
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognised dialect name
    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),
}

impl SqlGenError {
    /// Create an invalid argument error.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error for an empty string argument.
    pub fn empty(argument: &'static str) -> Self {
        Self::invalid_argument(argument, "must not be empty")
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown dialect error.
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::UnknownDialect(name.into())
    }

    /// Check if this error was caused by the caller's input rather than configuration.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Get a user-friendly suggestion for how to fix this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { .. } => {
                Some("Check the mapped table, column and schema names for empty values")
            }
            Self::Config(_) => Some("Check your environment variables and configuration"),
            Self::UnknownDialect(_) => {
                Some("Use one of: generic, sqlserver, oracle, sqlite")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = SqlGenError::empty("identifier");
        assert_eq!(
            err.to_string(),
            "Invalid argument `identifier`: must not be empty"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_config_errors_are_not_argument_errors() {
        assert!(!SqlGenError::config("bad").is_invalid_argument());
        assert!(!SqlGenError::unknown_dialect("db2").is_invalid_argument());
    }

    #[test]
    fn test_error_suggestions() {
        assert!(SqlGenError::empty("schema").suggestion().is_some());
        assert!(SqlGenError::unknown_dialect("db2")
            .suggestion()
            .unwrap()
            .contains("sqlserver"));
    }
}
