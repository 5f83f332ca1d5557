//! PostgreSQL dialect.

use super::{DdlDialect, string_literal};
use crate::column::ColumnDefinition;
use crate::types::DataType;

/// PostgreSQL dialect for DDL generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DdlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn map_data_type(&self, dt: &DataType) -> String {
        match dt {
            DataType::SmallInteger => "SMALLINT".to_string(),
            DataType::Integer => "INTEGER".to_string(),
            DataType::BigInteger => "BIGINT".to_string(),
            DataType::Real => "REAL".to_string(),
            DataType::Double => "DOUBLE PRECISION".to_string(),
            DataType::Decimal { precision, scale } => format!("DECIMAL({precision}, {scale})"),
            DataType::Char(n) => format!("CHAR({n})"),
            DataType::String(n) => format!("VARCHAR({n})"),
            DataType::Text => "TEXT".to_string(),
            DataType::Boolean => "BOOLEAN".to_string(),
            DataType::Date => "DATE".to_string(),
            DataType::Time => "TIME".to_string(),
            DataType::Timestamp => "TIMESTAMP".to_string(),
            DataType::Binary => "BYTEA".to_string(),
            DataType::Json => "JSONB".to_string(),
            DataType::Uuid => "UUID".to_string(),
            DataType::Custom(name) => name.clone(),
        }
    }

    fn autoincrement_keyword(&self) -> &'static str {
        // Auto-increment is expressed through the SERIAL family instead.
        ""
    }

    fn requires_primary_key_for_autoincrement(&self) -> bool {
        false
    }

    fn column_type(&self, col: &ColumnDefinition) -> String {
        if col.autoincrement {
            match col.data_type {
                DataType::SmallInteger => return "SMALLSERIAL".to_string(),
                DataType::Integer => return "SERIAL".to_string(),
                DataType::BigInteger => return "BIGSERIAL".to_string(),
                _ => {}
            }
        }
        self.map_data_type(&col.data_type)
    }

    fn has_table(&self, name: &str) -> String {
        format!("SELECT to_regclass({});", string_literal(name))
    }

    fn rename_column(&self, table: &str, from: &str, to: &str) -> String {
        format!("ALTER TABLE {table} RENAME {from} TO {to};")
    }
}
