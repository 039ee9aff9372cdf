//! SQL Server dialect.
//!
//! Uses SQL Server's bracket notation `[identifier]`. Only the closing bracket
//! needs escaping inside an identifier (`]` becomes `]]`); an opening bracket
//! is an ordinary character there.

use crate::generation::{Delimiters, SqlGenerationHelper};

/// Microsoft SQL Server (T-SQL).
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlGenerationHelper for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn delimiters(&self) -> Delimiters {
        Delimiters::BRACKETS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialect() -> SqlServerDialect {
        SqlServerDialect::new()
    }

    #[test]
    fn test_escape_simple_identifier() {
        assert_eq!(dialect().delimit_identifier("Users").unwrap(), "[Users]");
        assert_eq!(dialect().delimit_identifier("MyTable").unwrap(), "[MyTable]");
    }

    #[test]
    fn test_escape_qualified_identifier() {
        assert_eq!(
            dialect().delimit_qualified("Users", Some("dbo")).unwrap(),
            "[dbo].[Users]"
        );
    }

    #[test]
    fn test_escape_with_spaces() {
        assert_eq!(dialect().delimit_identifier("My Table").unwrap(), "[My Table]");
    }

    #[test]
    fn test_escape_with_brackets() {
        assert_eq!(dialect().delimit_identifier("Table[1]").unwrap(), "[Table[1]]]");
        assert_eq!(dialect().escape_identifier("]").unwrap(), "]]");
    }

    #[test]
    fn test_already_bracketed_is_escaped_again() {
        // A bracketed string is just a name here; it is never unwrapped.
        assert_eq!(dialect().delimit_identifier("[Users]").unwrap(), "[[Users]]]");
    }

    #[test]
    fn test_double_quote_is_ordinary() {
        assert_eq!(dialect().delimit_identifier("a\"b").unwrap(), "[a\"b]");
    }

    #[test]
    fn test_parameter_and_batch() {
        assert_eq!(dialect().generate_parameter_name("p0"), "@p0");
        assert_eq!(dialect().generate_parameter_name("_1x"), "@_1x");
        assert_eq!(dialect().batch_terminator(), "GO\n\n");
    }

    #[test]
    fn test_empty_identifier() {
        assert!(dialect().delimit_identifier("").is_err());
        assert!(dialect().escape_identifier("").is_err());
    }
}
