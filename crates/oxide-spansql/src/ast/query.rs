//! Query AST types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::expression::Expr;

/// `select [ORDER BY ...] [LIMIT ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    /// The SELECT.
    pub select: Select,
    /// ORDER BY terms; empty when there is no ORDER BY.
    pub order: Vec<Order>,
    /// LIMIT, if present.
    pub limit: Option<Limit>,
}

/// `SELECT list [FROM ...] [WHERE ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Select {
    /// Projected expressions.
    pub list: Vec<Expr>,
    /// FROM items; empty when there is no FROM.
    pub from: Vec<SelectFrom>,
    /// WHERE condition. Always boolean-shaped.
    pub where_clause: Option<Expr>,
}

/// A FROM item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectFrom {
    /// Table name.
    pub table: String,
    /// Sampling, if a TABLESAMPLE clause follows the table.
    pub table_sample: Option<TableSample>,
}

/// `TABLESAMPLE method (size unit)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableSample {
    /// Sampling method.
    pub method: SampleMethod,
    /// Sample size.
    pub size: Expr,
    /// Whether `size` counts percent or rows.
    pub size_type: SampleSize,
}

/// Table sampling method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleMethod {
    /// `BERNOULLI`
    Bernoulli,
    /// `RESERVOIR`
    Reservoir,
}

impl SampleMethod {
    /// Looks up a sampling method by keyword.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "BERNOULLI" => Some(Self::Bernoulli),
            "RESERVOIR" => Some(Self::Reservoir),
            _ => None,
        }
    }
}

/// Unit of a table sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleSize {
    /// `PERCENT`
    Percent,
    /// `ROWS`
    Rows,
}

impl SampleSize {
    /// Looks up a sample size unit by keyword.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "PERCENT" => Some(Self::Percent),
            "ROWS" => Some(Self::Rows),
            _ => None,
        }
    }
}

/// An ORDER BY term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    /// The expression to order by.
    pub expr: Expr,
    /// Whether `DESC` was given; ascending otherwise.
    pub desc: bool,
}

/// LIMIT count. Only literals and parameters are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Limit {
    /// An integer literal.
    Integer(i64),
    /// A `@name` parameter; the name excludes the `@`.
    Param(String),
}
