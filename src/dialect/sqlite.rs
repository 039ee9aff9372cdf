//! SQLite dialect.

use crate::constants::NO_BATCH_TERMINATOR;
use crate::generation::SqlGenerationHelper;

/// SQLite.
///
/// Identifiers and `@name` parameters follow the generic contract. SQLite
/// tooling has no client-side batch splitter, so there is no batch terminator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlGenerationHelper for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn batch_terminator(&self) -> &'static str {
        NO_BATCH_TERMINATOR
    }
}
