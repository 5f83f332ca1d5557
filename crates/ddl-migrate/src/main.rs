//! ddl-migrate CLI
//!
//! Prints the SQL a migration step would run, for a chosen dialect.
//! Nothing is executed: statements go to stdout, one per line.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use ddl_core::prelude::*;
use ddl_core::splitter::split;

/// Dialect-aware DDL for database migrations.
#[derive(Parser)]
#[command(name = "ddl-migrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL dialect (postgres, mysql, sqlite). Overrides the config file.
    #[arg(short, long, env = "DDL_DIALECT")]
    dialect: Option<Dialect>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Assume the SQLite version supports ALTER TABLE ... DROP COLUMN.
    #[arg(long)]
    sqlite_drop_column: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a SQL file (or stdin) into normalized statements.
    Split {
        /// SQL file to read; stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Print the query that checks whether a table exists.
    HasTable {
        /// Table name.
        name: String,
    },

    /// Drop one or more tables.
    Drop {
        /// Table names.
        #[arg(required = true)]
        names: Vec<String>,

        /// Add IF EXISTS.
        #[arg(long)]
        if_exists: bool,

        /// Add CASCADE.
        #[arg(long)]
        cascade: bool,
    },

    /// Rename a table.
    RenameTable {
        /// Current name.
        from: String,
        /// New name.
        to: String,
    },

    /// Rename a column.
    RenameColumn {
        /// Table name.
        table: String,
        /// Current column name.
        from: String,
        /// New column name.
        to: String,
    },

    /// Drop a column.
    DropColumn {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// Terminate and print a raw SQL statement.
    Raw {
        /// SQL text.
        sql: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(
        cli.config.as_deref(),
        cli.dialect,
        cli.sqlite_drop_column,
    )?;
    debug!(dialect = %config.dialect, "Using configuration");

    let mut schema = Schema::from_config(&config);

    let statements: Vec<String> = match cli.command {
        Commands::Split { file } => {
            let blob = read_input(file.as_deref())?;
            split(&blob)
        }

        Commands::HasTable { name } => vec![schema.has_table(&name)],

        Commands::Drop {
            names,
            if_exists,
            cascade,
        } => schema.drop(names, if_exists, cascade)?.to_vec(),

        Commands::RenameTable { from, to } => schema.rename_table(&from, &to).to_vec(),

        Commands::RenameColumn { table, from, to } => {
            schema.rename_column(&table, &from, &to).to_vec()
        }

        Commands::DropColumn { table, column } => {
            let statements = schema.drop_column(&table, &column)?.to_vec();
            if statements.is_empty() {
                info!(
                    "DROP COLUMN is disabled for {}; nothing to do.",
                    config.dialect
                );
            }
            statements
        }

        Commands::Raw { sql } => schema.query_string(sql).to_vec(),
    };

    for statement in &statements {
        println!("{statement}");
    }

    Ok(())
}

/// Loads the config file (if any) and applies command-line overrides.
fn resolve_config(
    path: Option<&Path>,
    dialect: Option<Dialect>,
    sqlite_drop_column: bool,
) -> anyhow::Result<SchemaConfig> {
    let mut config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            SchemaConfig::from_json_str(&json)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => SchemaConfig::default(),
    };

    if let Some(dialect) = dialect {
        config.dialect = dialect;
    }
    if sqlite_drop_column {
        config.native_drop_column = Some(true);
    }

    Ok(config)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read SQL file {}", path.display())),
        None => {
            let mut blob = String::new();
            std::io::stdin()
                .read_to_string(&mut blob)
                .context("Failed to read SQL from stdin")?;
            Ok(blob)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let config = resolve_config(None, None, false).unwrap();
        assert_eq!(config, SchemaConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ddl.json");
        std::fs::write(&path, r#"{"dialect": "mysql"}"#).unwrap();

        let config = resolve_config(Some(&path), None, false).unwrap();
        assert_eq!(config.dialect, Dialect::Mysql);

        let config = resolve_config(Some(&path), Some(Dialect::Sqlite), true).unwrap();
        assert_eq!(config.dialect, Dialect::Sqlite);
        assert!(config.capabilities().native_drop_column);
    }

    #[test]
    fn test_missing_config_file() {
        let err = resolve_config(Some(Path::new("/nonexistent/ddl.json")), None, false)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_parses_dialect_aliases() {
        let cli = Cli::try_parse_from(["ddl-migrate", "--dialect", "pg", "has-table", "users"])
            .unwrap();
        assert_eq!(cli.dialect, Some(Dialect::Postgres));
    }
}
