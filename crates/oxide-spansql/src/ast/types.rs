//! Column type definitions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scalar column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeBase {
    /// `BOOL`.
    Bool,
    /// `INT64`.
    Int64,
    /// `FLOAT64`.
    Float64,
    /// `STRING(length)`.
    String,
    /// `BYTES(length)`.
    Bytes,
    /// `DATE`.
    Date,
    /// `TIMESTAMP`.
    Timestamp,
}

impl TypeBase {
    /// Looks up a scalar type by its keyword. Matching is exact.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "BOOL" => Some(Self::Bool),
            "INT64" => Some(Self::Int64),
            "FLOAT64" => Some(Self::Float64),
            "STRING" => Some(Self::String),
            "BYTES" => Some(Self::Bytes),
            "DATE" => Some(Self::Date),
            "TIMESTAMP" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Returns the keyword for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Int64 => "INT64",
            Self::Float64 => "FLOAT64",
            Self::String => "STRING",
            Self::Bytes => "BYTES",
            Self::Date => "DATE",
            Self::Timestamp => "TIMESTAMP",
        }
    }

    /// Returns true for the types that take a `(length)` clause.
    #[must_use]
    pub const fn has_length(&self) -> bool {
        matches!(self, Self::String | Self::Bytes)
    }
}

/// The length of a `STRING` or `BYTES` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Length {
    /// `MAX`.
    Max,
    /// An explicit integer length.
    Fixed(i64),
}

/// A column type: a scalar, or an array of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Type {
    /// The scalar type, or the element type of an array.
    pub base: TypeBase,
    /// Whether this is `ARRAY<base>`.
    pub array: bool,
    /// Length, present exactly when `base` is `STRING` or `BYTES`.
    pub len: Option<Length>,
}

impl Type {
    /// A scalar type without a length.
    #[must_use]
    pub const fn scalar(base: TypeBase) -> Self {
        Self {
            base,
            array: false,
            len: None,
        }
    }

    /// A `STRING` or `BYTES` type with the given length.
    #[must_use]
    pub const fn sized(base: TypeBase, len: Length) -> Self {
        Self {
            base,
            array: false,
            len: Some(len),
        }
    }

    /// Wraps this type in `ARRAY<...>`.
    #[must_use]
    pub const fn into_array(self) -> Self {
        Self {
            array: true,
            ..self
        }
    }
}
