//! SQLite dialect.

use super::{DdlDialect, standard_column_definition, string_literal};
use crate::column::{ColumnDefinition, DefaultValue};
use crate::types::DataType;

/// SQLite dialect for DDL generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DdlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn map_data_type(&self, dt: &DataType) -> String {
        // SQLite has dynamic typing with type affinity
        match dt {
            DataType::SmallInteger | DataType::Integer | DataType::BigInteger => {
                "INTEGER".to_string()
            }
            DataType::Real | DataType::Double => "REAL".to_string(),
            DataType::Decimal { .. } => "NUMERIC".to_string(),
            DataType::Char(_) | DataType::String(_) | DataType::Text => "TEXT".to_string(),
            DataType::Date | DataType::Time | DataType::Timestamp => "TEXT".to_string(),
            DataType::Json | DataType::Uuid => "TEXT".to_string(),
            DataType::Binary => "BLOB".to_string(),
            DataType::Boolean => "INTEGER".to_string(), // SQLite has no bool, use 0/1
            DataType::Custom(name) => name.clone(),
        }
    }

    fn autoincrement_keyword(&self) -> &'static str {
        " AUTOINCREMENT"
    }

    fn requires_sole_autoincrement_key(&self) -> bool {
        true
    }

    fn column_definition(&self, col: &ColumnDefinition, inline_primary_key: bool) -> String {
        // AUTOINCREMENT is only accepted directly after INTEGER PRIMARY KEY.
        // Such a column is validated to be the sole key and to carry no
        // default, and the key already implies NOT NULL and UNIQUE.
        if col.autoincrement {
            return format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", col.name);
        }
        standard_column_definition(self, col, inline_primary_key)
    }

    fn render_default(&self, default: &DefaultValue) -> String {
        match default {
            DefaultValue::Boolean(b) => String::from(if *b { "1" } else { "0" }),
            _ => default.to_sql(),
        }
    }

    fn has_table(&self, name: &str) -> String {
        format!(
            "SELECT name FROM sqlite_master WHERE type='table' AND name={};",
            string_literal(name)
        )
    }

    fn drop_column_statement(&self, table: &str, column: &str) -> String {
        format!("ALTER TABLE {table} DROP COLUMN {column};")
    }
}
