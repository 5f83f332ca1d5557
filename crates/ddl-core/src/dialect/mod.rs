//! Dialect-specific SQL generation.
//!
//! Each supported database gets a unit struct implementing [`DdlDialect`].
//! The closed [`Dialect`] enum selects the implementation with an exhaustive
//! match, so adding a database means adding one variant and one strategy.

mod mysql;
mod postgres;
mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::column::{ColumnDefinition, DefaultValue, ForeignKeyAction};
use crate::constraint::{IndexDefinition, TableConstraint};
use crate::error::{Result, SchemaError};
use crate::types::DataType;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Dialect {
    /// PostgreSQL.
    #[default]
    Postgres,
    /// MySQL / MariaDB.
    Mysql,
    /// SQLite.
    Sqlite,
}

impl Dialect {
    /// All dialects, in declaration order.
    pub const ALL: [Self; 3] = [Self::Postgres, Self::Mysql, Self::Sqlite];

    /// Returns the SQL generation strategy for this dialect.
    #[must_use]
    pub fn ddl(self) -> &'static dyn DdlDialect {
        match self {
            Self::Postgres => &PostgresDialect,
            Self::Mysql => &MysqlDialect,
            Self::Sqlite => &SqliteDialect,
        }
    }

    /// Returns the dialect name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.ddl().name()
    }

    /// Capabilities assumed when none are configured.
    #[must_use]
    pub const fn default_capabilities(self) -> Capabilities {
        match self {
            Self::Postgres | Self::Mysql => Capabilities {
                native_drop_column: true,
            },
            // SQLite gained DROP COLUMN in 3.35; older versions are the baseline.
            Self::Sqlite => Capabilities {
                native_drop_column: false,
            },
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pg" | "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            _ => Err(SchemaError::UnknownDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Version-dependent features of a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether `ALTER TABLE ... DROP COLUMN` is available.
    pub native_drop_column: bool,
}

/// Trait for dialect-specific DDL generation.
///
/// Every method is a pure function of its arguments. Statement-producing
/// methods return text terminated by `;`.
pub trait DdlDialect: Send + Sync {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Maps a `DataType` to the dialect-specific SQL type.
    fn map_data_type(&self, dt: &DataType) -> String;

    /// Returns the modifier appended to auto-increment columns.
    fn autoincrement_keyword(&self) -> &'static str;

    /// Whether auto-increment columns must also be primary keys.
    fn requires_primary_key_for_autoincrement(&self) -> bool {
        true
    }

    /// Whether an auto-increment column must be the table's only key column.
    fn requires_sole_autoincrement_key(&self) -> bool {
        false
    }

    /// SQL type written for `col`; dialects may substitute types here.
    fn column_type(&self, col: &ColumnDefinition) -> String {
        self.map_data_type(&col.data_type)
    }

    /// Generates SQL for a column definition.
    ///
    /// `inline_primary_key` folds `PRIMARY KEY` into the column instead of
    /// leaving it to a table-level constraint.
    fn column_definition(&self, col: &ColumnDefinition, inline_primary_key: bool) -> String {
        standard_column_definition(self, col, inline_primary_key)
    }

    /// Renders a default value.
    fn render_default(&self, default: &DefaultValue) -> String {
        default.to_sql()
    }

    /// Generates SQL for a table constraint.
    fn table_constraint(&self, constraint: &TableConstraint) -> String {
        let (name, body) = match constraint {
            TableConstraint::PrimaryKey { name, columns } => {
                (name, format!("PRIMARY KEY ({})", columns.join(", ")))
            }
            TableConstraint::Unique { name, columns } => {
                (name, format!("UNIQUE ({})", columns.join(", ")))
            }
            TableConstraint::ForeignKey {
                name,
                columns,
                references_table,
                references_columns,
                on_delete,
                on_update,
            } => (
                name,
                foreign_key_clause(
                    columns,
                    references_table,
                    references_columns,
                    on_delete.as_ref(),
                    on_update.as_ref(),
                ),
            ),
            TableConstraint::Check { name, expression } => {
                (name, format!("CHECK ({expression})"))
            }
        };

        match name {
            Some(n) => format!("CONSTRAINT {n} {body}"),
            None => body,
        }
    }

    /// Generates SQL for CREATE INDEX.
    fn create_index(&self, table: &str, index: &IndexDefinition) -> String {
        format!(
            "CREATE {}INDEX {} ON {table} ({});",
            if index.unique { "UNIQUE " } else { "" },
            index.name,
            index.columns.join(", ")
        )
    }

    /// Generates SQL for DROP TABLE over one or more tables.
    fn drop_table(&self, names: &[String], if_exists: bool, cascade: bool) -> String {
        format!(
            "DROP TABLE{} {}{};",
            if if_exists { " IF EXISTS" } else { "" },
            names.join(", "),
            if cascade { " CASCADE" } else { "" }
        )
    }

    /// Generates a read-only query whose non-empty result means `name` exists.
    fn has_table(&self, name: &str) -> String;

    /// Generates SQL for renaming a table.
    fn rename_table(&self, from: &str, to: &str) -> String {
        format!("ALTER TABLE {from} RENAME TO {to};")
    }

    /// Generates SQL for renaming a column.
    fn rename_column(&self, table: &str, from: &str, to: &str) -> String {
        format!("ALTER TABLE {table} RENAME COLUMN {from} TO {to};")
    }

    /// Generates SQL for dropping a column.
    ///
    /// `Ok(None)` means the operation is skipped because
    /// [`Capabilities::native_drop_column`] is off; an
    /// [`SchemaError::UnsupportedOperation`] is for operations with no fallback.
    fn drop_column(
        &self,
        table: &str,
        column: &str,
        capabilities: &Capabilities,
    ) -> Result<Option<String>> {
        if !capabilities.native_drop_column {
            debug!(
                dialect = self.name(),
                table,
                column,
                "DROP COLUMN disabled, skipping"
            );
            return Ok(None);
        }
        Ok(Some(self.drop_column_statement(table, column)))
    }

    /// The `ALTER TABLE` statement emitted by [`drop_column`](Self::drop_column).
    fn drop_column_statement(&self, table: &str, column: &str) -> String {
        format!("ALTER TABLE {table} DROP {column};")
    }
}

/// Column rendering shared by the dialects:
/// `name TYPE [NOT NULL] [DEFAULT v] [auto-increment] [UNIQUE] [PRIMARY KEY]`.
pub(crate) fn standard_column_definition<D: DdlDialect + ?Sized>(
    dialect: &D,
    col: &ColumnDefinition,
    inline_primary_key: bool,
) -> String {
    let mut sql = format!("{} {}", col.name, dialect.column_type(col));

    if !col.nullable && !inline_primary_key {
        sql.push_str(" NOT NULL");
    }

    if let Some(ref default) = col.default {
        sql.push_str(" DEFAULT ");
        sql.push_str(&dialect.render_default(default));
    }

    if col.autoincrement {
        sql.push_str(dialect.autoincrement_keyword());
    }

    if col.unique && !inline_primary_key {
        sql.push_str(" UNIQUE");
    }

    if inline_primary_key {
        sql.push_str(" PRIMARY KEY");
    }

    sql
}

fn foreign_key_clause(
    columns: &[String],
    references_table: &str,
    references_columns: &[String],
    on_delete: Option<&ForeignKeyAction>,
    on_update: Option<&ForeignKeyAction>,
) -> String {
    let mut sql = format!(
        "FOREIGN KEY ({}) REFERENCES {references_table}({})",
        columns.join(", "),
        references_columns.join(", ")
    );
    if let Some(action) = on_delete {
        sql.push_str(" ON DELETE ");
        sql.push_str(action.as_sql());
    }
    if let Some(action) = on_update {
        sql.push_str(" ON UPDATE ");
        sql.push_str(action.as_sql());
    }
    sql
}

/// Quotes `value` as a SQL string literal.
pub(crate) fn string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
