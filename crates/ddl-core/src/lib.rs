//! # ddl-core
//!
//! Dialect-aware DDL generation for database migrations.
//!
//! This crate provides:
//! - A fluent [`TableBuilder`] describing columns and constraints independently
//!   of the target database
//! - Dialect strategies for PostgreSQL, MySQL and SQLite
//! - A statement [`splitter`] turning SQL blobs into executable statements
//! - The [`Schema`] facade that accumulates the statements of one migration
//!
//! Nothing here talks to a database: the output is plain SQL text, executed in
//! order by the migration runner.
//!
//! ## Example
//!
//! ```rust
//! use ddl_core::{Dialect, ForeignKeyAction, Schema};
//!
//! let mut schema = Schema::new(Dialect::Postgres);
//! schema
//!     .create("posts", |table| {
//!         table.increments("id");
//!         table
//!             .integer("author_id")
//!             .not_null()
//!             .references("users", "id")
//!             .on_delete(ForeignKeyAction::Cascade);
//!         table.string("title", 200).not_null();
//!     })
//!     .unwrap();
//!
//! assert_eq!(
//!     schema.statements(),
//!     ["CREATE TABLE posts (id SERIAL PRIMARY KEY, author_id INTEGER NOT NULL, \
//!       title VARCHAR(200) NOT NULL, \
//!       FOREIGN KEY (author_id) REFERENCES users(id) ON DELETE CASCADE);"]
//! );
//!
//! // Existence checks are returned, not recorded.
//! assert_eq!(schema.has_table("posts"), "SELECT to_regclass('posts');");
//! ```

pub mod column;
pub mod config;
pub mod constraint;
pub mod dialect;
pub mod error;
pub mod migration;
pub mod schema;
pub mod splitter;
pub mod table;
pub mod types;

pub use column::{ColumnDefinition, ColumnModifier, DefaultValue, ForeignKeyAction, ForeignKeyRef};
pub use config::SchemaConfig;
pub use constraint::{ForeignKeyModifier, IndexDefinition, TableConstraint};
pub use dialect::{Capabilities, DdlDialect, Dialect};
pub use error::{ConfigurationError, Result, SchemaError};
pub use migration::Migration;
pub use schema::Schema;
pub use table::TableBuilder;
pub use types::DataType;

/// Prelude for writing migrations.
pub mod prelude {
    pub use crate::column::{DefaultValue, ForeignKeyAction};
    pub use crate::config::SchemaConfig;
    pub use crate::dialect::{Capabilities, Dialect};
    pub use crate::error::{ConfigurationError, Result, SchemaError};
    pub use crate::migration::{Migration, render_down, render_up};
    pub use crate::schema::Schema;
    pub use crate::table::TableBuilder;
    pub use crate::types::DataType;
}
