//! Table-level constraints and auxiliary indexes.

use crate::column::ForeignKeyAction;

/// A constraint that is not attached to a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    /// PRIMARY KEY constraint.
    PrimaryKey {
        /// Optional constraint name.
        name: Option<String>,
        /// Columns in the key, in key order.
        columns: Vec<String>,
    },
    /// UNIQUE constraint.
    Unique {
        /// Optional constraint name.
        name: Option<String>,
        /// Columns in the constraint.
        columns: Vec<String>,
    },
    /// FOREIGN KEY constraint.
    ForeignKey {
        /// Optional constraint name.
        name: Option<String>,
        /// Local columns.
        columns: Vec<String>,
        /// Referenced table.
        references_table: String,
        /// Referenced columns.
        references_columns: Vec<String>,
        /// Action on delete.
        on_delete: Option<ForeignKeyAction>,
        /// Action on update.
        on_update: Option<ForeignKeyAction>,
    },
    /// CHECK constraint.
    Check {
        /// Optional constraint name.
        name: Option<String>,
        /// Check expression.
        expression: String,
    },
}

impl TableConstraint {
    /// Local columns the constraint refers to (empty for CHECK).
    #[must_use]
    pub fn columns(&self) -> &[String] {
        match self {
            Self::PrimaryKey { columns, .. }
            | Self::Unique { columns, .. }
            | Self::ForeignKey { columns, .. } => columns,
            Self::Check { .. } => &[],
        }
    }

    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::PrimaryKey { .. } => "primary key",
            Self::Unique { .. } => "unique constraint",
            Self::ForeignKey { .. } => "foreign key",
            Self::Check { .. } => "check constraint",
        }
    }
}

/// An index created alongside the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    /// Index name.
    pub name: String,
    /// Indexed columns.
    pub columns: Vec<String>,
    /// Whether this is a unique index.
    pub unique: bool,
}

impl IndexDefinition {
    /// Creates an index named `<table>_<columns>_index` (or `_unique`).
    #[must_use]
    pub fn for_table(table: &str, columns: Vec<String>, unique: bool) -> Self {
        let suffix = if unique { "unique" } else { "index" };
        let name = format!("{table}_{}_{suffix}", columns.join("_"));
        Self {
            name,
            columns,
            unique,
        }
    }
}

/// Fluent handle on a foreign key constraint added with
/// [`TableBuilder::foreign`](crate::TableBuilder::foreign).
#[derive(Debug)]
pub struct ForeignKeyModifier<'a> {
    constraint: &'a mut TableConstraint,
}

impl<'a> ForeignKeyModifier<'a> {
    pub(crate) fn new(constraint: &'a mut TableConstraint) -> Self {
        Self { constraint }
    }

    /// Names the constraint (`CONSTRAINT <name> FOREIGN KEY ...`).
    pub fn name(self, constraint_name: impl Into<String>) -> Self {
        if let TableConstraint::ForeignKey { name, .. } = self.constraint {
            *name = Some(constraint_name.into());
        }
        self
    }

    /// Sets the ON DELETE action.
    pub fn on_delete(self, action: impl Into<ForeignKeyAction>) -> Self {
        if let TableConstraint::ForeignKey { on_delete, .. } = self.constraint {
            *on_delete = Some(action.into());
        }
        self
    }

    /// Sets the ON UPDATE action.
    pub fn on_update(self, action: impl Into<ForeignKeyAction>) -> Self {
        if let TableConstraint::ForeignKey { on_update, .. } = self.constraint {
            *on_update = Some(action.into());
        }
        self
    }
}
