//! Generic SQL dialect.

use crate::generation::SqlGenerationHelper;

/// Dialect using every default of the generic contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlGenerationHelper for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Delimiters;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.delimiters(), Delimiters::DOUBLE_QUOTE);
        assert_eq!(dialect.parameter_marker(), '@');
        assert_eq!(dialect.batch_terminator(), "GO\n\n");
    }

    #[test]
    fn test_schema_qualified() {
        let dialect = GenericDialect::new();
        assert_eq!(
            dialect.delimit_qualified("Orders", Some("dbo")).unwrap(),
            "\"dbo\".\"Orders\""
        );
    }
}
