#![allow(dead_code)]

use ddl_core::{ConfigurationError, Dialect, Schema, SchemaError, TableBuilder};

/// Runs `configure` on a fresh builder and renders it, panicking on error.
pub fn render(dialect: Dialect, table: &str, configure: impl FnOnce(&mut TableBuilder)) -> String {
    let mut builder = TableBuilder::new(table, dialect);
    configure(&mut builder);
    builder
        .to_sql()
        .unwrap_or_else(|e| panic!("Failed to render {table} for {dialect}: {e}"))
}

/// Unwraps a configuration error, panicking on anything else.
pub fn config_error<T: std::fmt::Debug>(result: Result<T, SchemaError>) -> ConfigurationError {
    match result {
        Err(SchemaError::Configuration(err)) => err,
        other => panic!("Expected configuration error, got {other:?}"),
    }
}

/// A schema for every supported dialect.
pub fn schemas() -> Vec<Schema> {
    Dialect::ALL.into_iter().map(Schema::new).collect()
}
