//! Supported SQL dialects and their selection.
//!
//! Each dialect is a unit struct implementing [`SqlGenerationHelper`] that
//! overrides only what its engine spells differently from the generic
//! contract. [`DialectKind`] names them for configuration.

mod generic;
mod oracle;
mod sqlite;
mod sqlserver;

pub use generic::GenericDialect;
pub use oracle::OracleDialect;
pub use sqlite::SqliteDialect;
pub use sqlserver::SqlServerDialect;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::SqlGenError;
use crate::generation::SqlGenerationHelper;

/// Dialect selector.
///
/// Deserialization accepts every name [`FromStr`] does; serialization writes
/// the canonical [`name`](Self::name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum DialectKind {
    /// Generic ANSI-style contract: `"name"`, `@param`, `GO` batches.
    #[default]
    Generic,

    /// Microsoft SQL Server: `[name]`, `@param`, `GO` batches.
    SqlServer,

    /// Oracle: `"name"`, `:param` with illegal leading characters stripped.
    Oracle,

    /// SQLite: `"name"`, `@param`, no batch terminator.
    Sqlite,
}

impl DialectKind {
    /// Every supported dialect.
    pub const ALL: [DialectKind; 4] = [
        DialectKind::Generic,
        DialectKind::SqlServer,
        DialectKind::Oracle,
        DialectKind::Sqlite,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            DialectKind::Generic => "generic",
            DialectKind::SqlServer => "sqlserver",
            DialectKind::Oracle => "oracle",
            DialectKind::Sqlite => "sqlite",
        }
    }

    /// Shared generation helper for this dialect.
    pub fn helper(&self) -> Arc<dyn SqlGenerationHelper> {
        match self {
            DialectKind::Generic => Arc::new(GenericDialect::new()),
            DialectKind::SqlServer => Arc::new(SqlServerDialect::new()),
            DialectKind::Oracle => Arc::new(OracleDialect::new()),
            DialectKind::Sqlite => Arc::new(SqliteDialect::new()),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectKind {
    type Err = SqlGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" | "ansi" => Ok(DialectKind::Generic),
            "sqlserver" | "sql_server" | "sql-server" | "mssql" | "tsql" => {
                Ok(DialectKind::SqlServer)
            }
            "oracle" | "ora" => Ok(DialectKind::Oracle),
            "sqlite" | "sqlite3" => Ok(DialectKind::Sqlite),
            _ => Err(SqlGenError::unknown_dialect(s)),
        }
    }
}

impl TryFrom<String> for DialectKind {
    type Error = SqlGenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for DialectKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
