//! Generic SQL fragment generation.
//!
//! [`SqlGenerationHelper`] carries the dialect-independent contract. Every
//! method has a generic default; a dialect overrides only the pieces its engine
//! spells differently (delimiters, parameter rules, batch terminator) and
//! inherits the rest.
//!
//! Each operation has one buffer-appending primitive (`*_into`) and a
//! string-returning wrapper over it, so bulk statement assembly can stream
//! into a single `String` without intermediate allocations.

use std::fmt;

use crate::constants::{
    AT_MARKER, CLOSE_BRACKET, DEFAULT_BATCH_TERMINATOR, DOUBLE_QUOTE, OPEN_BRACKET,
    SCHEMA_SEPARATOR, SINGLE_LINE_COMMENT_TOKEN, STATEMENT_TERMINATOR,
};
use crate::error::SqlGenError;

/// Opening and closing characters that quote an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiters {
    /// Character written before the identifier.
    pub open: char,
    /// Character written after the identifier; doubled when it occurs inside it.
    pub close: char,
}

impl Delimiters {
    /// ANSI quoted identifiers: `"name"`.
    pub const DOUBLE_QUOTE: Self = Self {
        open: DOUBLE_QUOTE,
        close: DOUBLE_QUOTE,
    };

    /// SQL Server bracketed identifiers: `[name]`.
    pub const BRACKETS: Self = Self {
        open: OPEN_BRACKET,
        close: CLOSE_BRACKET,
    };
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::DOUBLE_QUOTE
    }
}

/// A generated bound-parameter name.
///
/// The placeholder spliced into SQL text and the name the binding layer uses
/// come from the same sanitized value, so callers must bind with
/// [`binding_name`](Self::binding_name) rather than the raw name they passed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterName {
    marker: char,
    name: String,
}

impl ParameterName {
    /// The dialect's parameter marker (e.g. `@` or `:`).
    pub fn marker(&self) -> char {
        self.marker
    }

    /// The sanitized name without the marker.
    pub fn binding_name(&self) -> &str {
        &self.name
    }

    /// The placeholder text to splice into SQL (marker followed by the name).
    pub fn placeholder(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 1);
        self.write_placeholder(&mut out);
        out
    }

    /// Append the placeholder text to `out`.
    pub fn write_placeholder(&self, out: &mut String) {
        out.push(self.marker);
        out.push_str(&self.name);
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.marker, self.name)
    }
}

/// Dialect-pluggable generation of identifiers, parameter names and
/// statement-boundary tokens.
///
/// Implementations are immutable and shared read-only, typically as
/// `Arc<dyn SqlGenerationHelper>` held by a [`crate::SqlGenerator`].
pub trait SqlGenerationHelper: fmt::Debug + Send + Sync {
    /// Short lowercase name of the dialect.
    fn name(&self) -> &'static str;

    /// Identifier delimiters.
    fn delimiters(&self) -> Delimiters {
        Delimiters::DOUBLE_QUOTE
    }

    /// Prefix marking a bound-parameter placeholder.
    fn parameter_marker(&self) -> char {
        AT_MARKER
    }

    /// Token ending a single statement.
    fn statement_terminator(&self) -> &'static str {
        STATEMENT_TERMINATOR
    }

    /// Token separating independent batches for client-side script splitters.
    ///
    /// Dialects without such a convention return an empty string.
    fn batch_terminator(&self) -> &'static str {
        DEFAULT_BATCH_TERMINATOR
    }

    /// Token introducing a single-line comment.
    fn single_line_comment_token(&self) -> &'static str {
        SINGLE_LINE_COMMENT_TOKEN
    }

    /// Append `identifier` to `out`, doubling every closing delimiter.
    ///
    /// Nothing is written when the identifier is rejected.
    fn escape_identifier_into(
        &self,
        out: &mut String,
        identifier: &str,
    ) -> Result<(), SqlGenError> {
        if identifier.is_empty() {
            return Err(SqlGenError::empty("identifier"));
        }

        let close = self.delimiters().close;
        out.reserve(identifier.len());
        for c in identifier.chars() {
            out.push(c);
            if c == close {
                out.push(c);
            }
        }

        Ok(())
    }

    /// Escape `identifier` without delimiting it.
    fn escape_identifier(&self, identifier: &str) -> Result<String, SqlGenError> {
        let mut out = String::with_capacity(identifier.len());
        self.escape_identifier_into(&mut out, identifier)?;
        Ok(out)
    }

    /// Append the escaped, delimited `identifier` to `out`.
    fn delimit_identifier_into(
        &self,
        out: &mut String,
        identifier: &str,
    ) -> Result<(), SqlGenError> {
        if identifier.is_empty() {
            return Err(SqlGenError::empty("identifier"));
        }

        let delimiters = self.delimiters();
        out.push(delimiters.open);
        self.escape_identifier_into(out, identifier)?;
        out.push(delimiters.close);
        Ok(())
    }

    /// Escape and delimit `identifier`.
    ///
    /// ```
    /// use sqlgen_dialects::{DialectKind, SqlGenerationHelper};
    ///
    /// let sqlserver = DialectKind::SqlServer.helper();
    /// assert_eq!(sqlserver.delimit_identifier("Order]Lines").unwrap(), "[Order]]Lines]");
    /// ```
    fn delimit_identifier(&self, identifier: &str) -> Result<String, SqlGenError> {
        let mut out = String::with_capacity(identifier.len() + 2);
        self.delimit_identifier_into(&mut out, identifier)?;
        Ok(out)
    }

    /// Append `name`, qualified by `schema` when one is given, to `out`.
    ///
    /// An empty schema is treated as no schema. Both parts are escaped with the
    /// same rule and joined by `.`.
    fn delimit_qualified_into(
        &self,
        out: &mut String,
        name: &str,
        schema: Option<&str>,
    ) -> Result<(), SqlGenError> {
        if name.is_empty() {
            return Err(SqlGenError::empty("name"));
        }

        if let Some(schema) = schema.filter(|s| !s.is_empty()) {
            self.delimit_identifier_into(out, schema)?;
            out.push(SCHEMA_SEPARATOR);
        }
        self.delimit_identifier_into(out, name)
    }

    /// Delimit `name`, qualified by `schema` when one is given.
    ///
    /// ```
    /// use sqlgen_dialects::{DialectKind, SqlGenerationHelper};
    ///
    /// let generic = DialectKind::Generic.helper();
    /// assert_eq!(generic.delimit_qualified("Orders", Some("dbo")).unwrap(), r#""dbo"."Orders""#);
    /// assert_eq!(generic.delimit_qualified("Orders", None).unwrap(), r#""Orders""#);
    /// ```
    fn delimit_qualified(&self, name: &str, schema: Option<&str>) -> Result<String, SqlGenError> {
        let capacity = name.len() + schema.map_or(0, |s| s.len() + 3) + 2;
        let mut out = String::with_capacity(capacity);
        self.delimit_qualified_into(&mut out, name, schema)?;
        Ok(out)
    }

    /// Append `name`, optionally schema-qualified, to `out`.
    ///
    /// With `include_delimiter` the parts are delimited as in
    /// [`delimit_qualified_into`](Self::delimit_qualified_into). Without it
    /// they are only escaped, for callers that supply their own delimiters.
    fn delimit_into(
        &self,
        out: &mut String,
        name: &str,
        schema: Option<&str>,
        include_delimiter: bool,
    ) -> Result<(), SqlGenError> {
        if include_delimiter {
            return self.delimit_qualified_into(out, name, schema);
        }
        if name.is_empty() {
            return Err(SqlGenError::empty("name"));
        }

        if let Some(schema) = schema.filter(|s| !s.is_empty()) {
            self.escape_identifier_into(out, schema)?;
            out.push(SCHEMA_SEPARATOR);
        }
        self.escape_identifier_into(out, name)
    }

    /// Render `name`, optionally schema-qualified, with or without delimiters.
    ///
    /// ```
    /// use sqlgen_dialects::{DialectKind, SqlGenerationHelper};
    ///
    /// let sqlserver = DialectKind::SqlServer.helper();
    /// assert_eq!(sqlserver.delimit("a]b", Some("dbo"), true).unwrap(), "[dbo].[a]]b]");
    /// assert_eq!(sqlserver.delimit("a]b", Some("dbo"), false).unwrap(), "dbo.a]]b");
    /// ```
    fn delimit(
        &self,
        name: &str,
        schema: Option<&str>,
        include_delimiter: bool,
    ) -> Result<String, SqlGenError> {
        let capacity = name.len() + schema.map_or(0, |s| s.len() + 3) + 2;
        let mut out = String::with_capacity(capacity);
        self.delimit_into(&mut out, name, schema, include_delimiter)?;
        Ok(out)
    }

    /// Strip characters that may not start a bound-parameter name.
    ///
    /// The generic contract accepts any name unchanged.
    fn sanitize_parameter_name<'a>(&self, name: &'a str) -> &'a str {
        name
    }

    /// Append the parameter placeholder for `name` to `out`.
    fn generate_parameter_name_into(&self, out: &mut String, name: &str) {
        out.push(self.parameter_marker());
        out.push_str(self.sanitize_parameter_name(name));
    }

    /// Parameter placeholder text for `name`.
    fn generate_parameter_name(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 1);
        self.generate_parameter_name_into(&mut out, name);
        out
    }

    /// Placeholder and binding name for `name`, derived together.
    fn parameter(&self, name: &str) -> ParameterName {
        ParameterName {
            marker: self.parameter_marker(),
            name: self.sanitize_parameter_name(name).to_owned(),
        }
    }

    /// Append `text` as single-line comments, one per line, to `out`.
    fn generate_comment_into(&self, out: &mut String, text: &str) {
        let token = self.single_line_comment_token();
        for line in text.lines() {
            out.push_str(token);
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
            out.push('\n');
        }
    }

    /// Render `text` as single-line comments.
    fn generate_comment(&self, text: &str) -> String {
        let mut out = String::new();
        self.generate_comment_into(&mut out, text);
        out
    }
}
