//! # sqlgen-dialects
//!
//! Dialect-pluggable generation of SQL text fragments.
//!
//! This crate provides:
//! - **Identifiers**: escaping and delimiting table, column and schema names
//! - **Parameters**: dialect-legal bound-parameter placeholders and binding names
//! - **Boundaries**: statement terminators, batch terminators and comments
//!
//! ## Architecture
//!
//! [`SqlGenerationHelper`] defines the generic contract with default method
//! bodies. Each dialect in [`dialect`] overrides only what its engine spells
//! differently. A [`SqlGenerator`] binds one dialect per provider
//! configuration and is shared read-only by every caller.
//!
//! ```
//! use sqlgen_dialects::{DialectKind, SqlGenerationHelper, SqlGenerator};
//!
//! let sql = SqlGenerator::new(DialectKind::SqlServer);
//! let mut out = String::from("SELECT * FROM ");
//! sql.delimit_qualified_into(&mut out, "Orders", Some("dbo")).unwrap();
//! out.push_str(" WHERE [Id] = ");
//! sql.generate_parameter_name_into(&mut out, "id");
//! assert_eq!(out, "SELECT * FROM [dbo].[Orders] WHERE [Id] = @id");
//! ```

pub mod config;
pub mod constants;
pub mod dialect;
pub mod error;
pub mod generation;
pub mod generator;

pub use config::Config;
pub use dialect::DialectKind;
pub use error::SqlGenError;
pub use generation::{Delimiters, ParameterName, SqlGenerationHelper};
pub use generator::SqlGenerator;
