//! Column definitions and their fluent modifiers.

use std::fmt;

use crate::dialect::string_literal;
use crate::types::DataType;

/// What happens to referencing rows when the referenced row changes.
///
/// `Raw` carries any keyword the target database understands; it is written
/// out unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForeignKeyAction {
    /// `NO ACTION`.
    NoAction,
    /// `RESTRICT`.
    Restrict,
    /// `CASCADE`.
    Cascade,
    /// `SET NULL`.
    SetNull,
    /// `SET DEFAULT`.
    SetDefault,
    /// Caller-supplied action text.
    Raw(String),
}

impl ForeignKeyAction {
    /// SQL keyword(s) for the action.
    #[must_use]
    pub fn as_sql(&self) -> &str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::Raw(action) => action,
        }
    }
}

impl From<&str> for ForeignKeyAction {
    fn from(action: &str) -> Self {
        Self::Raw(action.to_string())
    }
}

impl From<String> for ForeignKeyAction {
    fn from(action: String) -> Self {
        Self::Raw(action)
    }
}

impl fmt::Display for ForeignKeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Target of a column-level foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    /// Referenced table.
    pub table: String,
    /// Referenced column.
    pub column: String,
    /// ON DELETE action, if any.
    pub on_delete: Option<ForeignKeyAction>,
    /// ON UPDATE action, if any.
    pub on_update: Option<ForeignKeyAction>,
}

/// Value written after `DEFAULT`.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// `NULL`.
    Null,
    /// `TRUE` / `FALSE`.
    Boolean(bool),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// Quoted string literal.
    String(String),
    /// SQL expression written verbatim, e.g. `CURRENT_TIMESTAMP`.
    Expression(String),
}

impl DefaultValue {
    /// Dialect-neutral SQL for the value.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Boolean(true) => "TRUE".to_string(),
            Self::Boolean(false) => "FALSE".to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::String(value) => string_literal(value),
            Self::Expression(expr) => expr.clone(),
        }
    }
}

/// One column of a table being created.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// Column name, written unquoted.
    pub name: String,
    /// Semantic type, mapped by the dialect.
    pub data_type: DataType,
    /// Columns start nullable; `NOT NULL` is opt-in.
    pub nullable: bool,
    /// Value written after `DEFAULT`, if any.
    pub default: Option<DefaultValue>,
    /// Part of the primary key. Several flagged columns form a composite key.
    pub primary_key: bool,
    /// Column-level `UNIQUE`; implied when the column is the sole key.
    pub unique: bool,
    /// Database-generated values. Integer types only, never with a default.
    pub autoincrement: bool,
    /// Emit a `CREATE INDEX` for this column after the table.
    pub index: bool,
    /// Foreign key target, rendered as a table-level constraint.
    pub references: Option<ForeignKeyRef>,
}

impl ColumnDefinition {
    /// A nullable column without modifiers.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            default: None,
            primary_key: false,
            unique: false,
            autoincrement: false,
            index: false,
            references: None,
        }
    }
}

/// Fluent handle on a column that was just added to a table.
///
/// Returned by the column methods of [`TableBuilder`](crate::TableBuilder);
/// every modifier edits the column in place and hands the handle back.
#[derive(Debug)]
pub struct ColumnModifier<'a> {
    column: &'a mut ColumnDefinition,
}

impl<'a> ColumnModifier<'a> {
    pub(crate) fn new(column: &'a mut ColumnDefinition) -> Self {
        Self { column }
    }

    /// `NOT NULL`.
    pub fn not_null(self) -> Self {
        self.column.nullable = false;
        self
    }

    /// Allows NULL again after [`not_null`](Self::not_null).
    pub fn nullable(self) -> Self {
        self.column.nullable = true;
        self
    }

    /// Makes the column (part of) the primary key. Implies `NOT NULL`.
    pub fn primary_key(self) -> Self {
        self.column.primary_key = true;
        self.column.nullable = false;
        self
    }

    /// `UNIQUE`.
    pub fn unique(self) -> Self {
        self.column.unique = true;
        self
    }

    /// Lets the database generate increasing values for the column.
    pub fn autoincrement(self) -> Self {
        self.column.autoincrement = true;
        self
    }

    /// Adds a plain index on the column.
    pub fn index(self) -> Self {
        self.column.index = true;
        self
    }

    /// `DEFAULT NULL`.
    pub fn default_null(self) -> Self {
        self.set_default(DefaultValue::Null)
    }

    /// Default to `TRUE`/`FALSE` (`1`/`0` on SQLite).
    pub fn default_bool(self, value: bool) -> Self {
        self.set_default(DefaultValue::Boolean(value))
    }

    /// Default to an integer literal.
    pub fn default_int(self, value: i64) -> Self {
        self.set_default(DefaultValue::Integer(value))
    }

    /// Default to a floating point literal.
    pub fn default_float(self, value: f64) -> Self {
        self.set_default(DefaultValue::Float(value))
    }

    /// Default to a string literal; quotes are doubled when rendered.
    pub fn default_str(self, value: impl Into<String>) -> Self {
        self.set_default(DefaultValue::String(value.into()))
    }

    /// Default to a verbatim SQL expression.
    pub fn default_expr(self, expr: impl Into<String>) -> Self {
        self.set_default(DefaultValue::Expression(expr.into()))
    }

    /// Points this column at `table(column)`.
    pub fn references(self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.column.references = Some(ForeignKeyRef {
            table: table.into(),
            column: column.into(),
            on_delete: None,
            on_update: None,
        });
        self
    }

    /// Sets the ON DELETE action of the column's foreign key.
    ///
    /// Has no effect unless [`references`](Self::references) was called first.
    pub fn on_delete(self, action: impl Into<ForeignKeyAction>) -> Self {
        if let Some(fk) = self.column.references.as_mut() {
            fk.on_delete = Some(action.into());
        }
        self
    }

    /// Sets the ON UPDATE action of the column's foreign key.
    ///
    /// Has no effect unless [`references`](Self::references) was called first.
    pub fn on_update(self, action: impl Into<ForeignKeyAction>) -> Self {
        if let Some(fk) = self.column.references.as_mut() {
            fk.on_update = Some(action.into());
        }
        self
    }

    fn set_default(self, value: DefaultValue) -> Self {
        self.column.default = Some(value);
        self
    }
}
