//! Error types for DDL generation.

/// Invalid table or statement definitions, detected before any SQL is emitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A table was configured without any columns.
    #[error("Table '{table}' has no columns")]
    EmptyTable {
        /// The table being created.
        table: String,
    },

    /// Two columns share the same name.
    #[error("Duplicate column '{column}' in table '{table}'")]
    DuplicateColumn {
        /// The table being created.
        table: String,
        /// The repeated column name.
        column: String,
    },

    /// Auto-increment was requested on a column outside the integer family.
    #[error("Column '{table}.{column}' is {data_type}; auto-increment requires an integer type")]
    AutoIncrementType {
        /// The table being created.
        table: String,
        /// The offending column.
        column: String,
        /// Human readable name of the declared type.
        data_type: String,
    },

    /// Auto-increment columns take their values from the database.
    #[error("Column '{table}.{column}' is auto-increment and cannot have a default")]
    AutoIncrementDefault {
        /// The table being created.
        table: String,
        /// The offending column.
        column: String,
    },

    /// More than one auto-increment column.
    #[error("Table '{table}' declares more than one auto-increment column")]
    MultipleAutoIncrement {
        /// The table being created.
        table: String,
    },

    /// The dialect needs auto-increment columns to be primary keys.
    #[error("Column '{table}.{column}' is auto-increment but not a primary key ({dialect})")]
    AutoIncrementWithoutPrimaryKey {
        /// The table being created.
        table: String,
        /// The offending column.
        column: String,
        /// Dialect that enforces the rule.
        dialect: &'static str,
    },

    /// SQLite auto-increment columns must be the only primary key column,
    /// declared on the column itself.
    #[error(
        "Column '{table}.{column}' is auto-increment and must be the sole, column-level primary key ({dialect})"
    )]
    AutoIncrementCompositeKey {
        /// The table being created.
        table: String,
        /// The offending column.
        column: String,
        /// Dialect that enforces the rule.
        dialect: &'static str,
    },

    /// Both column-level and table-level primary keys were declared.
    #[error("Table '{table}' declares more than one primary key")]
    MultiplePrimaryKeys {
        /// The table being created.
        table: String,
    },

    /// A constraint or index names a column the table does not declare.
    #[error("Table '{table}' has no column '{column}'")]
    UnknownColumn {
        /// The table being created.
        table: String,
        /// The missing column.
        column: String,
    },

    /// A constraint or index lists no columns.
    #[error("Table '{table}' has a {kind} without columns")]
    EmptyConstraint {
        /// The table being created.
        table: String,
        /// Constraint kind, e.g. "foreign key".
        kind: &'static str,
    },

    /// DROP TABLE was requested without any table names.
    #[error("No table names given to drop")]
    NoTables,
}

/// Errors surfaced by schema operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The migration definition is invalid.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The dialect has no way to express the operation.
    #[error("{operation} is not supported by {dialect}")]
    UnsupportedOperation {
        /// Dialect name.
        dialect: &'static str,
        /// Operation name.
        operation: &'static str,
    },

    /// A dialect name could not be parsed.
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    /// A configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_converts() {
        let err: SchemaError = ConfigurationError::EmptyTable {
            table: "users".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Table 'users' has no columns"
        );
    }

    #[test]
    fn test_unsupported_message() {
        let err = SchemaError::UnsupportedOperation {
            dialect: "sqlite",
            operation: "ALTER COLUMN",
        };
        assert_eq!(err.to_string(), "ALTER COLUMN is not supported by sqlite");
    }
}
