//! Dialect-neutral column types.

use std::fmt;

/// Semantic column type, mapped to concrete SQL by each dialect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    SmallInteger,
    Integer,
    BigInteger,
    /// Single precision float.
    Real,
    Double,
    /// Fixed point number.
    Decimal { precision: u16, scale: u16 },
    /// Fixed-length string of the given size.
    Char(u32),
    /// Variable-length string with a maximum size.
    String(u32),
    /// Unbounded text.
    Text,
    Boolean,
    Date,
    Time,
    Timestamp,
    /// Raw bytes.
    Binary,
    Json,
    Uuid,

    /// Raw SQL type, emitted verbatim by every dialect.
    Custom(String),
}

impl DataType {
    /// Returns `true` for the integer family (small, regular and big integers).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::SmallInteger | Self::Integer | Self::BigInteger)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SmallInteger => f.write_str("small integer"),
            Self::Integer => f.write_str("integer"),
            Self::BigInteger => f.write_str("big integer"),
            Self::Real => f.write_str("real"),
            Self::Double => f.write_str("double"),
            Self::Decimal { precision, scale } => write!(f, "decimal({precision}, {scale})"),
            Self::Char(len) => write!(f, "char({len})"),
            Self::String(len) => write!(f, "string({len})"),
            Self::Text => f.write_str("text"),
            Self::Boolean => f.write_str("boolean"),
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::Binary => f.write_str("binary"),
            Self::Json => f.write_str("json"),
            Self::Uuid => f.write_str("uuid"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}
