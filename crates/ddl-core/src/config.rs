//! Schema configuration, as loaded by the migration tool.

use serde::Deserialize;

use crate::dialect::{Capabilities, Dialect};
use crate::error::{Result, SchemaError};

/// Dialect selection and capability overrides for a [`Schema`](crate::Schema).
///
/// Deserialized from JSON such as:
///
/// ```json
/// { "dialect": "sqlite", "native_drop_column": true }
/// ```
///
/// Every field is optional; the dialect defaults to Postgres and capabilities
/// default to what the dialect assumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Target dialect.
    pub dialect: Dialect,
    /// Overrides [`Capabilities::native_drop_column`].
    pub native_drop_column: Option<bool>,
}

impl SchemaConfig {
    /// Creates a configuration for `dialect` with default capabilities.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            native_drop_column: None,
        }
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidConfig`] if the document is malformed or
    /// names an unknown dialect.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SchemaError::InvalidConfig(e.to_string()))
    }

    /// Effective capabilities: dialect defaults plus overrides.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        let mut capabilities = self.dialect.default_capabilities();
        if let Some(native_drop_column) = self.native_drop_column {
            capabilities.native_drop_column = native_drop_column;
        }
        capabilities
    }
}
