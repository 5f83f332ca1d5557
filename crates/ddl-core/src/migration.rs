//! The contract between migration definitions and the migration runner.
//!
//! A migration describes its forward and backward schema changes against a
//! [`Schema`] whose dialect was chosen by the runner's configuration. The
//! runner executes the resulting statements in order; ordering migrations and
//! recording which ones ran is its business, not this crate's.

use crate::config::SchemaConfig;
use crate::error::Result;
use crate::schema::Schema;

/// A database migration with up/down definitions.
///
/// # Example
///
/// ```rust
/// use ddl_core::migration::{Migration, render_down, render_up};
/// use ddl_core::{Dialect, Result, Schema, SchemaConfig};
///
/// pub struct CreateUsers;
///
/// impl Migration for CreateUsers {
///     const ID: &'static str = "20240101120000_create_users";
///
///     fn up(schema: &mut Schema) -> Result<()> {
///         schema.create("users", |table| {
///             table.increments("id");
///             table.string("username", 64).not_null().unique();
///         })?;
///         Ok(())
///     }
///
///     fn down(schema: &mut Schema) -> Result<()> {
///         schema.drop(["users"], true, false)?;
///         Ok(())
///     }
/// }
///
/// let config = SchemaConfig::new(Dialect::Sqlite);
/// assert_eq!(
///     render_up::<CreateUsers>(&config).unwrap(),
///     ["CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, username TEXT NOT NULL UNIQUE);"]
/// );
/// assert_eq!(
///     render_down::<CreateUsers>(&config).unwrap(),
///     ["DROP TABLE IF EXISTS users;"]
/// );
/// ```
pub trait Migration {
    /// Unique migration identifier, usually prefixed with a timestamp.
    const ID: &'static str;

    /// Apply the migration (forward).
    ///
    /// # Errors
    ///
    /// Returns an error if a table definition is invalid.
    fn up(schema: &mut Schema) -> Result<()>;

    /// Reverse the migration (backward).
    ///
    /// # Errors
    ///
    /// Returns an error if a table definition is invalid.
    fn down(schema: &mut Schema) -> Result<()>;
}

/// Returns the statements of `M::up` on a fresh schema.
///
/// # Errors
///
/// Propagates any error raised by the migration.
pub fn render_up<M: Migration>(config: &SchemaConfig) -> Result<Vec<String>> {
    let mut schema = Schema::from_config(config);
    M::up(&mut schema)?;
    Ok(schema.into_statements())
}

/// Returns the statements of `M::down` on a fresh schema.
///
/// # Errors
///
/// Propagates any error raised by the migration.
pub fn render_down<M: Migration>(config: &SchemaConfig) -> Result<Vec<String>> {
    let mut schema = Schema::from_config(config);
    M::down(&mut schema)?;
    Ok(schema.into_statements())
}
