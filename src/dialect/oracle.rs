//! Oracle dialect.
//!
//! Oracle bind variables are written `:name` and may not start with a digit or
//! an underscore. Parameter names produced upstream (e.g. from property names)
//! can start with either, so they are normalized here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{COLON_MARKER, DEFAULT_BATCH_TERMINATOR};
use crate::generation::SqlGenerationHelper;

/// Run of leading characters illegal at the start of a bind variable.
///
/// `\d` is Unicode-aware, so any decimal digit is stripped, not only ASCII.
static LEADING_ILLEGAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[_\d]*").unwrap_or_else(|e| {
        panic!("Internal error: invalid regex pattern: {}", e)
    })
});

/// Oracle Database.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect;

impl OracleDialect {
    /// Creates a new Oracle dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlGenerationHelper for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn parameter_marker(&self) -> char {
        COLON_MARKER
    }

    fn batch_terminator(&self) -> &'static str {
        DEFAULT_BATCH_TERMINATOR
    }

    fn sanitize_parameter_name<'a>(&self, name: &'a str) -> &'a str {
        let start = LEADING_ILLEGAL.find(name).map_or(0, |m| m.end());
        let sanitized = &name[start..];
        if start > 0 {
            tracing::trace!(
                original = name,
                sanitized,
                "stripped illegal leading characters from parameter name"
            );
        }
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialect() -> OracleDialect {
        OracleDialect::new()
    }

    #[test]
    fn test_parameter_name_convergence() {
        assert_eq!(dialect().generate_parameter_name("_1abc"), ":abc");
        assert_eq!(dialect().generate_parameter_name("123x"), ":x");
        assert_eq!(dialect().generate_parameter_name("abc"), ":abc");
    }

    #[test]
    fn test_interleaved_prefix() {
        assert_eq!(dialect().generate_parameter_name("__0_9_name"), ":name");
        assert_eq!(dialect().generate_parameter_name("1_2_x_3"), ":x_3");
    }

    #[test]
    fn test_inner_characters_kept() {
        assert_eq!(dialect().generate_parameter_name("p_1"), ":p_1");
        assert_eq!(dialect().generate_parameter_name("a__b99"), ":a__b99");
    }

    #[test]
    fn test_unicode_digits_stripped() {
        // ARABIC-INDIC DIGIT ONE
        assert_eq!(dialect().generate_parameter_name("\u{0661}name"), ":name");
    }

    #[test]
    fn test_all_illegal_yields_bare_marker() {
        assert_eq!(dialect().generate_parameter_name("_123_"), ":");
        assert_eq!(dialect().generate_parameter_name(""), ":");
    }

    #[test]
    fn test_binding_name_matches_placeholder() {
        let param = dialect().parameter("_0customer");
        assert_eq!(param.binding_name(), "customer");
        assert_eq!(param.placeholder(), ":customer");
    }

    #[test]
    fn test_identifiers_use_double_quotes() {
        assert_eq!(dialect().delimit_identifier("a\"b").unwrap(), "\"a\"\"b\"");
        assert_eq!(
            dialect().delimit_qualified("ORDERS", Some("SALES")).unwrap(),
            "\"SALES\".\"ORDERS\""
        );
    }

    #[test]
    fn test_batch_terminator() {
        assert_eq!(dialect().batch_terminator(), "GO\n\n");
    }
}
