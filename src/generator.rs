//! Dialect binding for a provider configuration.
//!
//! A [`SqlGenerator`] binds exactly one dialect. It is immutable and cheap to
//! clone; every clone shares the same helper. Switching dialects means
//! building a new generator.

use std::ops::Deref;
use std::sync::Arc;

use crate::config::Config;
use crate::dialect::DialectKind;
use crate::error::SqlGenError;
use crate::generation::SqlGenerationHelper;

/// SQL fragment generator bound to one dialect.
#[derive(Debug, Clone)]
pub struct SqlGenerator {
    helper: Arc<dyn SqlGenerationHelper>,
}

impl SqlGenerator {
    /// Bind one of the built-in dialects.
    pub fn new(kind: DialectKind) -> Self {
        Self::with_helper(kind.helper())
    }

    /// Bind a custom dialect implementation.
    pub fn with_helper(helper: Arc<dyn SqlGenerationHelper>) -> Self {
        tracing::debug!(dialect = helper.name(), "bound SQL generation dialect");
        Self { helper }
    }

    /// Bind the dialect named by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.dialect)
    }

    /// Bind the dialect named by the environment.
    ///
    /// See [`Config::from_env`].
    pub fn from_env() -> Result<Self, SqlGenError> {
        Ok(Self::from_config(&Config::from_env()?))
    }

    /// The bound helper.
    pub fn helper(&self) -> &Arc<dyn SqlGenerationHelper> {
        &self.helper
    }
}

impl Default for SqlGenerator {
    fn default() -> Self {
        Self::new(DialectKind::default())
    }
}

impl Deref for SqlGenerator {
    type Target = dyn SqlGenerationHelper;

    fn deref(&self) -> &Self::Target {
        self.helper.as_ref()
    }
}
