//! MySQL dialect.

use super::{DdlDialect, string_literal};
use crate::types::DataType;

/// MySQL dialect for DDL generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DdlDialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn map_data_type(&self, dt: &DataType) -> String {
        match dt {
            DataType::SmallInteger => "SMALLINT".to_string(),
            DataType::Integer => "INTEGER".to_string(),
            DataType::BigInteger => "BIGINT".to_string(),
            DataType::Real => "FLOAT".to_string(),
            DataType::Double => "DOUBLE".to_string(),
            DataType::Decimal { precision, scale } => format!("DECIMAL({precision}, {scale})"),
            DataType::Char(n) => format!("CHAR({n})"),
            DataType::String(n) => format!("VARCHAR({n})"),
            DataType::Text => "TEXT".to_string(),
            DataType::Boolean => "BOOLEAN".to_string(),
            DataType::Date => "DATE".to_string(),
            DataType::Time => "TIME".to_string(),
            DataType::Timestamp => "TIMESTAMP".to_string(),
            DataType::Binary => "BLOB".to_string(),
            DataType::Json => "JSON".to_string(),
            DataType::Uuid => "CHAR(36)".to_string(),
            DataType::Custom(name) => name.clone(),
        }
    }

    fn autoincrement_keyword(&self) -> &'static str {
        " AUTO_INCREMENT"
    }

    fn has_table(&self, name: &str) -> String {
        format!("show tables like {};", string_literal(name))
    }

    fn rename_table(&self, from: &str, to: &str) -> String {
        format!("RENAME TABLE {from} TO {to};")
    }
}
