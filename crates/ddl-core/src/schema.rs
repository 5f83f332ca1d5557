//! The schema facade that accumulates migration statements.

use tracing::debug;

use crate::config::SchemaConfig;
use crate::dialect::{Capabilities, Dialect};
use crate::error::{ConfigurationError, Result};
use crate::splitter::split;
use crate::table::TableBuilder;

/// Collects the DDL statements of one migration for a fixed dialect.
///
/// Every operation except [`has_table`](Self::has_table) appends to the
/// statement list and returns the whole list. Failed operations leave the list
/// untouched.
///
/// # Example
///
/// ```rust
/// use ddl_core::{Dialect, Schema};
///
/// let mut schema = Schema::new(Dialect::Mysql);
/// schema
///     .create("users", |table| {
///         table.increments("id");
///         table.string("email", 255).not_null();
///     })
///     .unwrap();
/// schema.rename_column("users", "email", "mail");
///
/// assert_eq!(
///     schema.statements(),
///     [
///         "CREATE TABLE users (id INTEGER AUTO_INCREMENT PRIMARY KEY, email VARCHAR(255) NOT NULL);",
///         "ALTER TABLE users RENAME COLUMN email TO mail;",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    dialect: Dialect,
    capabilities: Capabilities,
    statements: Vec<String>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

impl Schema {
    /// Creates an empty schema with the dialect's default capabilities.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            capabilities: dialect.default_capabilities(),
            statements: Vec::new(),
        }
    }

    /// Creates an empty schema from loaded configuration.
    #[must_use]
    pub fn from_config(config: &SchemaConfig) -> Self {
        Self::new(config.dialect).with_capabilities(config.capabilities())
    }

    /// Overrides the capabilities of the target database.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns the statements accumulated so far, in execution order.
    #[must_use]
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Consumes the schema, returning its statements.
    #[must_use]
    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }

    /// Creates a table configured by `configure`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the table definition is invalid.
    pub fn create<F>(&mut self, name: impl Into<String>, configure: F) -> Result<&[String]>
    where
        F: FnOnce(&mut TableBuilder),
    {
        let mut table = TableBuilder::new(name, self.dialect);
        configure(&mut table);
        let sql = table.to_sql()?;

        for statement in split(&sql) {
            self.push(statement);
        }
        Ok(&self.statements)
    }

    /// Appends caller-written SQL, adding a terminating `;` when missing.
    pub fn query_string(&mut self, raw: impl Into<String>) -> &[String] {
        let mut sql = raw.into();
        if !sql.trim_end().ends_with(';') {
            sql.push(';');
        }
        self.push(sql);
        &self.statements
    }

    /// Drops one or more tables in a single statement.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoTables`] if `names` is empty.
    pub fn drop<I, S>(&mut self, names: I, if_exists: bool, cascade: bool) -> Result<&[String]>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigurationError::NoTables.into());
        }
        let sql = self.dialect.ddl().drop_table(&names, if_exists, cascade);
        self.push(sql);
        Ok(&self.statements)
    }

    /// Returns a query that yields rows only if `name` exists.
    ///
    /// The query is not added to the statement list.
    #[must_use]
    pub fn has_table(&self, name: &str) -> String {
        self.dialect.ddl().has_table(name)
    }

    /// Renames a table.
    pub fn rename_table(&mut self, from: &str, to: &str) -> &[String] {
        let sql = self.dialect.ddl().rename_table(from, to);
        self.push(sql);
        &self.statements
    }

    /// Renames a column.
    pub fn rename_column(&mut self, table: &str, from: &str, to: &str) -> &[String] {
        let sql = self.dialect.ddl().rename_column(table, from, to);
        self.push(sql);
        &self.statements
    }

    /// Drops a column.
    ///
    /// Nothing is appended when the capabilities disable native DROP COLUMN,
    /// which is the SQLite default.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnsupportedOperation`](crate::SchemaError) if the
    /// dialect cannot express the operation at all.
    pub fn drop_column(&mut self, table: &str, column: &str) -> Result<&[String]> {
        let sql = self
            .dialect
            .ddl()
            .drop_column(table, column, &self.capabilities)?;
        if let Some(sql) = sql {
            self.push(sql);
        }
        Ok(&self.statements)
    }

    fn push(&mut self, statement: String) {
        debug!(dialect = %self.dialect, sql = %statement, "Appending statement");
        self.statements.push(statement);
    }
}
