//! Configuration management.
//!
//! Configuration is loaded from environment variables following the 12-factor
//! app pattern, or deserialized from a host application's own config.

use serde::{Deserialize, Serialize};

use crate::constants::DIALECT_ENV_VAR;
use crate::dialect::DialectKind;
use crate::error::SqlGenError;

/// Provider configuration for SQL fragment generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dialect bound for the lifetime of this configuration.
    #[serde(default)]
    pub dialect: DialectKind,
}

impl Config {
    /// Create a configuration for a specific dialect.
    pub fn new(dialect: DialectKind) -> Self {
        Self { dialect }
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// ## Optional
    /// - `SQLGEN_DIALECT`: Dialect name (generic, sqlserver, oracle, sqlite;
    ///   default: generic)
    pub fn from_env() -> Result<Self, SqlGenError> {
        let dialect = match std::env::var(DIALECT_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            Ok(_) | Err(std::env::VarError::NotPresent) => DialectKind::default(),
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(SqlGenError::config(format!(
                    "{} must be valid unicode",
                    DIALECT_ENV_VAR
                )))
            }
        };

        tracing::debug!(dialect = %dialect, "configuration loaded");
        Ok(Config { dialect })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        assert_eq!(Config::default().dialect, DialectKind::Generic);
    }

    #[test]
    fn test_config_new() {
        assert_eq!(Config::new(DialectKind::Oracle).dialect, DialectKind::Oracle);
    }
}
