//! Centralized constants for SQL fragment generation.
//!
//! Delimiters, markers and terminators for every supported dialect live here so
//! the per-dialect modules only decide which of them apply.

// =============================================================================
// Identifier Delimiters
// =============================================================================

/// ANSI quoted-identifier delimiter (both open and close).
pub const DOUBLE_QUOTE: char = '"';

/// SQL Server opening bracket delimiter.
pub const OPEN_BRACKET: char = '[';

/// SQL Server closing bracket delimiter.
pub const CLOSE_BRACKET: char = ']';

/// Separator between a schema qualifier and an object name.
pub const SCHEMA_SEPARATOR: char = '.';

// =============================================================================
// Parameter Markers
// =============================================================================

/// Named-parameter marker used by the generic contract, SQL Server and SQLite.
pub const AT_MARKER: char = '@';

/// Bind-variable marker used by Oracle.
pub const COLON_MARKER: char = ':';

// =============================================================================
// Statement and Batch Boundaries
// =============================================================================

/// Terminator appended after each statement.
pub const STATEMENT_TERMINATOR: &str = ";";

/// Client-side batch separator understood by sqlcmd-style script splitters.
pub const DEFAULT_BATCH_TERMINATOR: &str = "GO\n\n";

/// Batch terminator for dialects with no client-side splitting convention.
pub const NO_BATCH_TERMINATOR: &str = "";

/// Token introducing a single-line SQL comment.
pub const SINGLE_LINE_COMMENT_TOKEN: &str = "--";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable selecting the dialect bound by [`crate::Config::from_env`].
pub const DIALECT_ENV_VAR: &str = "SQLGEN_DIALECT";
