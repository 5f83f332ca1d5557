//! Fluent CREATE TABLE builder.
//!
//! A [`TableBuilder`] is handed to the configuration closure of
//! [`Schema::create`](crate::Schema::create). Column methods append a column
//! and return a [`ColumnModifier`] for it; table-level methods add constraints
//! and indexes. [`TableBuilder::to_sql`] validates the definition and renders
//! it for the builder's dialect.

use std::collections::HashSet;

use tracing::debug;

use crate::column::{ColumnDefinition, ColumnModifier};
use crate::constraint::{ForeignKeyModifier, IndexDefinition, TableConstraint};
use crate::dialect::{DdlDialect, Dialect};
use crate::error::{ConfigurationError, Result};
use crate::splitter::escape_statement;
use crate::types::DataType;

/// Builder for one CREATE TABLE statement.
///
/// # Example
///
/// ```rust
/// use ddl_core::{Dialect, TableBuilder};
///
/// let mut table = TableBuilder::new("users", Dialect::Postgres);
/// table.increments("id");
/// table.string("email", 255).not_null().unique();
///
/// assert_eq!(
///     table.to_sql().unwrap(),
///     "CREATE TABLE users (id SERIAL PRIMARY KEY, email VARCHAR(255) NOT NULL UNIQUE);"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: String,
    dialect: Dialect,
    columns: Vec<ColumnDefinition>,
    constraints: Vec<TableConstraint>,
    indexes: Vec<IndexDefinition>,
    if_not_exists: bool,
}

impl TableBuilder {
    /// Creates an empty builder for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            name: name.into(),
            dialect,
            columns: Vec::new(),
            constraints: Vec::new(),
            indexes: Vec::new(),
            if_not_exists: false,
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dialect the table is rendered for.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Returns the table-level constraints in declaration order.
    #[must_use]
    pub fn constraints(&self) -> &[TableConstraint] {
        &self.constraints
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Adds a column of an arbitrary type.
    pub fn column(&mut self, name: impl Into<String>, data_type: DataType) -> ColumnModifier<'_> {
        self.columns.push(ColumnDefinition::new(name, data_type));
        let last = self.columns.len() - 1;
        ColumnModifier::new(&mut self.columns[last])
    }

    /// Adds an auto-incrementing integer primary key.
    pub fn increments(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.integer(name).primary_key().autoincrement()
    }

    /// Adds an auto-incrementing big integer primary key.
    pub fn big_increments(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.big_integer(name).primary_key().autoincrement()
    }

    /// Adds a SMALLINT column.
    pub fn small_integer(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::SmallInteger)
    }

    /// Adds an INTEGER column.
    pub fn integer(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Integer)
    }

    /// Adds a BIGINT column.
    pub fn big_integer(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::BigInteger)
    }

    /// Adds a REAL column.
    pub fn real(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Real)
    }

    /// Adds a DOUBLE column.
    pub fn double(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Double)
    }

    /// Adds a DECIMAL column.
    pub fn decimal(
        &mut self,
        name: impl Into<String>,
        precision: u16,
        scale: u16,
    ) -> ColumnModifier<'_> {
        self.column(name, DataType::Decimal { precision, scale })
    }

    /// Adds a fixed-length CHAR column.
    pub fn char(&mut self, name: impl Into<String>, length: u32) -> ColumnModifier<'_> {
        self.column(name, DataType::Char(length))
    }

    /// Adds a VARCHAR column.
    pub fn string(&mut self, name: impl Into<String>, length: u32) -> ColumnModifier<'_> {
        self.column(name, DataType::String(length))
    }

    /// Adds a TEXT column.
    pub fn text(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Text)
    }

    /// Adds a BOOLEAN column.
    pub fn boolean(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Boolean)
    }

    /// Adds a DATE column.
    pub fn date(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Date)
    }

    /// Adds a TIME column.
    pub fn time(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Time)
    }

    /// Adds a TIMESTAMP column.
    pub fn timestamp(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Timestamp)
    }

    /// Adds a binary column.
    pub fn binary(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Binary)
    }

    /// Adds a JSON column.
    pub fn json(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Json)
    }

    /// Adds a UUID column.
    pub fn uuid(&mut self, name: impl Into<String>) -> ColumnModifier<'_> {
        self.column(name, DataType::Uuid)
    }

    /// Adds a column whose SQL type is written verbatim.
    pub fn custom(
        &mut self,
        name: impl Into<String>,
        sql_type: impl Into<String>,
    ) -> ColumnModifier<'_> {
        self.column(name, DataType::Custom(sql_type.into()))
    }

    /// Adds `created_at` and `updated_at` timestamps defaulting to the current time.
    pub fn timestamps(&mut self) {
        for name in ["created_at", "updated_at"] {
            self.timestamp(name)
                .not_null()
                .default_expr("CURRENT_TIMESTAMP");
        }
    }

    // =========================================================================
    // Table-level constraints
    // =========================================================================

    /// Uses IF NOT EXISTS clause.
    pub fn if_not_exists(&mut self) -> &mut Self {
        self.if_not_exists = true;
        self
    }

    /// Adds a composite primary key constraint.
    pub fn primary_key(&mut self, columns: &[&str]) -> &mut Self {
        self.constraints.push(TableConstraint::PrimaryKey {
            name: None,
            columns: owned(columns),
        });
        self
    }

    /// Adds a unique constraint on multiple columns.
    pub fn unique(&mut self, columns: &[&str]) -> &mut Self {
        self.constraints.push(TableConstraint::Unique {
            name: None,
            columns: owned(columns),
        });
        self
    }

    /// Adds a check constraint.
    pub fn check(&mut self, expression: impl Into<String>) -> &mut Self {
        self.constraints.push(TableConstraint::Check {
            name: None,
            expression: expression.into(),
        });
        self
    }

    /// Adds an arbitrary table constraint.
    pub fn constraint(&mut self, constraint: TableConstraint) -> &mut Self {
        self.constraints.push(constraint);
        self
    }

    /// Adds a foreign key from `columns` to `references_table(references_columns)`.
    pub fn foreign(
        &mut self,
        columns: &[&str],
        references_table: impl Into<String>,
        references_columns: &[&str],
    ) -> ForeignKeyModifier<'_> {
        self.constraints.push(TableConstraint::ForeignKey {
            name: None,
            columns: owned(columns),
            references_table: references_table.into(),
            references_columns: owned(references_columns),
            on_delete: None,
            on_update: None,
        });
        let last = self.constraints.len() - 1;
        ForeignKeyModifier::new(&mut self.constraints[last])
    }

    /// Creates a plain index on `columns` after the table.
    pub fn index(&mut self, columns: &[&str]) -> &mut Self {
        self.indexes
            .push(IndexDefinition::for_table(&self.name, owned(columns), false));
        self
    }

    /// Creates a unique index on `columns` after the table.
    pub fn unique_index(&mut self, columns: &[&str]) -> &mut Self {
        self.indexes
            .push(IndexDefinition::for_table(&self.name, owned(columns), true));
        self
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    /// Renders the CREATE TABLE statement, followed by any index statements.
    ///
    /// Statements are separated by newlines. Semicolons inside a statement are
    /// escaped as `\;`, so [`split`](crate::splitter::split) yields exactly one
    /// statement per table and per index.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the definition is invalid; no SQL
    /// is produced in that case.
    pub fn to_sql(&self) -> Result<String> {
        let ddl = self.dialect.ddl();
        self.validate(ddl)?;

        let key_columns: Vec<String> = self
            .columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.clone())
            .collect();
        let inline_key = key_columns.len() == 1;

        let mut fragments: Vec<String> = self
            .columns
            .iter()
            .map(|c| ddl.column_definition(c, inline_key && c.primary_key))
            .collect();

        if key_columns.len() > 1 {
            fragments.push(ddl.table_constraint(&TableConstraint::PrimaryKey {
                name: None,
                columns: key_columns,
            }));
        }

        for col in &self.columns {
            if let Some(ref fk) = col.references {
                fragments.push(ddl.table_constraint(&TableConstraint::ForeignKey {
                    name: None,
                    columns: vec![col.name.clone()],
                    references_table: fk.table.clone(),
                    references_columns: vec![fk.column.clone()],
                    on_delete: fk.on_delete.clone(),
                    on_update: fk.on_update.clone(),
                }));
            }
        }

        fragments.extend(self.constraints.iter().map(|c| ddl.table_constraint(c)));

        let mut sql = escape_statement(&format!(
            "CREATE TABLE {}{} ({});",
            if self.if_not_exists {
                "IF NOT EXISTS "
            } else {
                ""
            },
            self.name,
            fragments.join(", ")
        ));

        for index in self.all_indexes() {
            sql.push('\n');
            sql.push_str(&escape_statement(&ddl.create_index(&self.name, &index)));
        }

        debug!(
            table = %self.name,
            dialect = %self.dialect,
            columns = self.columns.len(),
            "Compiled table definition"
        );
        Ok(sql)
    }

    fn all_indexes(&self) -> Vec<IndexDefinition> {
        self.columns
            .iter()
            .filter(|c| c.index)
            .map(|c| IndexDefinition::for_table(&self.name, vec![c.name.clone()], false))
            .chain(self.indexes.iter().cloned())
            .collect()
    }

    fn validate(&self, ddl: &dyn DdlDialect) -> std::result::Result<(), ConfigurationError> {
        let table = || self.name.clone();

        if self.columns.is_empty() {
            return Err(ConfigurationError::EmptyTable { table: table() });
        }

        let mut seen = HashSet::new();
        for col in &self.columns {
            if !seen.insert(col.name.as_str()) {
                return Err(ConfigurationError::DuplicateColumn {
                    table: table(),
                    column: col.name.clone(),
                });
            }
        }

        let table_keys: Vec<&TableConstraint> = self
            .constraints
            .iter()
            .filter(|c| matches!(c, TableConstraint::PrimaryKey { .. }))
            .collect();
        let column_keys = self.columns.iter().filter(|c| c.primary_key).count();
        if table_keys.len() > 1 || (table_keys.len() == 1 && column_keys > 0) {
            return Err(ConfigurationError::MultiplePrimaryKeys { table: table() });
        }

        let mut autoincrement = self.columns.iter().filter(|c| c.autoincrement);
        if let Some(col) = autoincrement.next() {
            if autoincrement.next().is_some() {
                return Err(ConfigurationError::MultipleAutoIncrement { table: table() });
            }
            if !col.data_type.is_integer() {
                return Err(ConfigurationError::AutoIncrementType {
                    table: table(),
                    column: col.name.clone(),
                    data_type: col.data_type.to_string(),
                });
            }
            if col.default.is_some() {
                return Err(ConfigurationError::AutoIncrementDefault {
                    table: table(),
                    column: col.name.clone(),
                });
            }
            let keyed = col.primary_key
                || table_keys
                    .iter()
                    .any(|key| key.columns().contains(&col.name));
            if ddl.requires_primary_key_for_autoincrement() && !keyed {
                return Err(ConfigurationError::AutoIncrementWithoutPrimaryKey {
                    table: table(),
                    column: col.name.clone(),
                    dialect: ddl.name(),
                });
            }
            if ddl.requires_sole_autoincrement_key() && (!col.primary_key || column_keys > 1) {
                return Err(ConfigurationError::AutoIncrementCompositeKey {
                    table: table(),
                    column: col.name.clone(),
                    dialect: ddl.name(),
                });
            }
        }

        for constraint in &self.constraints {
            if matches!(constraint, TableConstraint::Check { .. }) {
                continue;
            }
            let missing_reference = matches!(
                constraint,
                TableConstraint::ForeignKey { references_columns, .. } if references_columns.is_empty()
            );
            if constraint.columns().is_empty() || missing_reference {
                return Err(ConfigurationError::EmptyConstraint {
                    table: table(),
                    kind: constraint.kind(),
                });
            }
            self.check_known(&seen, constraint.columns())?;
        }

        for index in &self.indexes {
            if index.columns.is_empty() {
                return Err(ConfigurationError::EmptyConstraint {
                    table: table(),
                    kind: "index",
                });
            }
            self.check_known(&seen, &index.columns)?;
        }

        Ok(())
    }

    fn check_known(
        &self,
        known: &HashSet<&str>,
        columns: &[String],
    ) -> std::result::Result<(), ConfigurationError> {
        match columns.iter().find(|c| !known.contains(c.as_str())) {
            Some(missing) => Err(ConfigurationError::UnknownColumn {
                table: self.name.clone(),
                column: missing.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn owned(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ForeignKeyAction;
    use crate::error::SchemaError;

    fn config_error(result: Result<String>) -> ConfigurationError {
        match result {
            Err(SchemaError::Configuration(err)) => err,
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_columns_in_declaration_order() {
        let mut table = TableBuilder::new("users", Dialect::Postgres);
        table.increments("id");
        table.string("username", 64).not_null().unique();
        table.boolean("active").not_null().default_bool(true);
        table.timestamp("created_at").nullable();

        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE users (id SERIAL PRIMARY KEY, \
             username VARCHAR(64) NOT NULL UNIQUE, \
             active BOOLEAN NOT NULL DEFAULT TRUE, \
             created_at TIMESTAMP);"
        );
    }

    #[test]
    fn test_mysql_increments() {
        let mut table = TableBuilder::new("users", Dialect::Mysql);
        table.increments("id");
        table.text("bio");
        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE users (id INTEGER AUTO_INCREMENT PRIMARY KEY, bio TEXT);"
        );
    }

    #[test]
    fn test_sqlite_increments() {
        let mut table = TableBuilder::new("users", Dialect::Sqlite);
        table.big_increments("id");
        table.string("name", 100).not_null();
        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL);"
        );
    }

    #[test]
    fn test_composite_key_from_columns() {
        let mut table = TableBuilder::new("order_items", Dialect::Postgres);
        table.integer("order_id").primary_key();
        table.integer("product_id").primary_key();
        table.integer("quantity").not_null();

        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE order_items (order_id INTEGER NOT NULL, \
             product_id INTEGER NOT NULL, quantity INTEGER NOT NULL, \
             PRIMARY KEY (order_id, product_id));"
        );
    }

    #[test]
    fn test_foreign_keys_are_table_level() {
        let mut table = TableBuilder::new("posts", Dialect::Mysql);
        table.increments("id");
        table
            .integer("user_id")
            .not_null()
            .references("users", "id")
            .on_delete(ForeignKeyAction::Cascade);
        table.integer("editor_id");
        table
            .foreign(&["editor_id"], "users", &["id"])
            .name("fk_posts_editor")
            .on_update("RESTRICT");

        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE posts (id INTEGER AUTO_INCREMENT PRIMARY KEY, \
             user_id INTEGER NOT NULL, editor_id INTEGER, \
             FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE, \
             CONSTRAINT fk_posts_editor FOREIGN KEY (editor_id) REFERENCES users(id) \
             ON UPDATE RESTRICT);"
        );
    }

    #[test]
    fn test_table_constraints_and_indexes() {
        let mut table = TableBuilder::new("accounts", Dialect::Sqlite);
        table.integer("tenant_id").not_null();
        table.string("slug", 32).not_null().index();
        table
            .primary_key(&["tenant_id", "slug"])
            .check("length(slug) > 0")
            .unique_index(&["tenant_id", "slug"]);

        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE accounts (tenant_id INTEGER NOT NULL, slug TEXT NOT NULL, \
             PRIMARY KEY (tenant_id, slug), CHECK (length(slug) > 0));\n\
             CREATE INDEX accounts_slug_index ON accounts (slug);\n\
             CREATE UNIQUE INDEX accounts_tenant_id_slug_unique ON accounts (tenant_id, slug);"
        );
    }

    #[test]
    fn test_if_not_exists() {
        let mut table = TableBuilder::new("flags", Dialect::Postgres);
        table.if_not_exists();
        table.boolean("enabled");
        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE IF NOT EXISTS flags (enabled BOOLEAN);"
        );
    }

    #[test]
    fn test_timestamps() {
        let mut table = TableBuilder::new("events", Dialect::Postgres);
        table.timestamps();
        assert_eq!(table.columns().len(), 2);
        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE events (created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP, \
             updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP);"
        );
    }

    #[test]
    fn test_semicolon_in_default_is_escaped() {
        let mut table = TableBuilder::new("notes", Dialect::Postgres);
        table.string("sep", 8).default_str(";");
        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE notes (sep VARCHAR(8) DEFAULT '\\;');"
        );
    }

    #[test]
    fn test_empty_table_fails() {
        let table = TableBuilder::new("empty", Dialect::Postgres);
        assert_eq!(
            config_error(table.to_sql()),
            ConfigurationError::EmptyTable {
                table: "empty".into()
            }
        );
    }

    #[test]
    fn test_duplicate_column_fails() {
        let mut table = TableBuilder::new("users", Dialect::Mysql);
        table.integer("id");
        table.string("id", 10);
        assert_eq!(
            config_error(table.to_sql()),
            ConfigurationError::DuplicateColumn {
                table: "users".into(),
                column: "id".into()
            }
        );
    }

    #[test]
    fn test_autoincrement_on_string_fails() {
        let mut table = TableBuilder::new("users", Dialect::Postgres);
        table.string("code", 8).autoincrement();
        assert!(matches!(
            config_error(table.to_sql()),
            ConfigurationError::AutoIncrementType { .. }
        ));
    }

    #[test]
    fn test_two_autoincrement_columns_fail() {
        let mut table = TableBuilder::new("users", Dialect::Postgres);
        table.increments("id");
        table.integer("seq").autoincrement();
        assert_eq!(
            config_error(table.to_sql()),
            ConfigurationError::MultipleAutoIncrement {
                table: "users".into()
            }
        );
    }

    #[test]
    fn test_autoincrement_without_key_depends_on_dialect() {
        for dialect in [Dialect::Mysql, Dialect::Sqlite] {
            let mut table = TableBuilder::new("counters", dialect);
            table.integer("n").autoincrement();
            assert!(matches!(
                config_error(table.to_sql()),
                ConfigurationError::AutoIncrementWithoutPrimaryKey { .. }
            ));
        }

        let mut table = TableBuilder::new("counters", Dialect::Postgres);
        table.integer("n").autoincrement();
        assert_eq!(table.to_sql().unwrap(), "CREATE TABLE counters (n SERIAL);");
    }

    #[test]
    fn test_sqlite_autoincrement_in_composite_key_fails() {
        let mut table = TableBuilder::new("pairs", Dialect::Sqlite);
        table.increments("id");
        table.integer("other").primary_key();
        assert!(matches!(
            config_error(table.to_sql()),
            ConfigurationError::AutoIncrementCompositeKey { .. }
        ));
    }

    #[test]
    fn test_autoincrement_keyed_by_table_constraint() {
        let mut table = TableBuilder::new("tickets", Dialect::Mysql);
        table.integer("id").autoincrement();
        table.string("title", 80).not_null();
        table.primary_key(&["id"]);
        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE tickets (id INTEGER AUTO_INCREMENT, title VARCHAR(80) NOT NULL, \
             PRIMARY KEY (id));"
        );
    }

    #[test]
    fn test_sqlite_autoincrement_needs_column_level_key() {
        let mut table = TableBuilder::new("tickets", Dialect::Sqlite);
        table.integer("id").autoincrement();
        table.primary_key(&["id"]);
        assert_eq!(
            config_error(table.to_sql()),
            ConfigurationError::AutoIncrementCompositeKey {
                table: "tickets".into(),
                column: "id".into(),
                dialect: "sqlite",
            }
        );
    }

    #[test]
    fn test_autoincrement_with_default_fails() {
        for dialect in Dialect::ALL {
            let mut table = TableBuilder::new("tickets", dialect);
            table.increments("id").default_int(100);
            assert_eq!(
                config_error(table.to_sql()),
                ConfigurationError::AutoIncrementDefault {
                    table: "tickets".into(),
                    column: "id".into(),
                }
            );
        }
    }

    #[test]
    fn test_sqlite_autoincrement_unique_is_implied() {
        let mut table = TableBuilder::new("tickets", Dialect::Sqlite);
        table.increments("id").unique();
        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE tickets (id INTEGER PRIMARY KEY AUTOINCREMENT);"
        );
    }

    #[test]
    fn test_custom_type_semicolon_is_escaped() {
        let mut table = TableBuilder::new("items", Dialect::Mysql);
        table.custom("kind", "ENUM('a;b')").not_null();
        table
            .foreign(&["kind"], "kinds", &["name"])
            .on_delete("SET NULL;");
        assert_eq!(
            table.to_sql().unwrap(),
            "CREATE TABLE items (kind ENUM('a\\;b') NOT NULL, \
             FOREIGN KEY (kind) REFERENCES kinds(name) ON DELETE SET NULL\\;);"
        );
    }

    #[test]
    fn test_column_and_table_primary_key_fail() {
        let mut table = TableBuilder::new("users", Dialect::Postgres);
        table.integer("id").primary_key();
        table.primary_key(&["id"]);
        assert_eq!(
            config_error(table.to_sql()),
            ConfigurationError::MultiplePrimaryKeys {
                table: "users".into()
            }
        );
    }

    #[test]
    fn test_unknown_constraint_column_fails() {
        let mut table = TableBuilder::new("users", Dialect::Postgres);
        table.integer("id");
        table.unique(&["email"]);
        assert_eq!(
            config_error(table.to_sql()),
            ConfigurationError::UnknownColumn {
                table: "users".into(),
                column: "email".into()
            }
        );
    }

    #[test]
    fn test_empty_constraint_fails() {
        let mut table = TableBuilder::new("users", Dialect::Postgres);
        table.integer("id");
        table.foreign(&["id"], "other", &[]);
        assert_eq!(
            config_error(table.to_sql()),
            ConfigurationError::EmptyConstraint {
                table: "users".into(),
                kind: "foreign key"
            }
        );

        let mut table = TableBuilder::new("users", Dialect::Postgres);
        table.integer("id");
        table.index(&[]);
        assert!(matches!(
            config_error(table.to_sql()),
            ConfigurationError::EmptyConstraint { kind: "index", .. }
        ));
    }
}
