//! Expression AST types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// String literal, unescaped.
    String(String),
    /// `TRUE` or `FALSE`.
    Bool(bool),
    /// `NULL`.
    Null,
}

/// `AND` and `OR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogicalOp {
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
}

impl LogicalOp {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Binary comparison operators. `BETWEEN` has its own expression variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComparisonOp {
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `=`
    Eq,
    /// `!=` or `<>`
    NotEq,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
}

impl ComparisonOp {
    /// Looks up a symbolic comparison operator.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "<" => Some(Self::Lt),
            "<=" => Some(Self::LtEq),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::GtEq),
            "=" => Some(Self::Eq),
            "!=" | "<>" => Some(Self::NotEq),
            _ => None,
        }
    }

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }
}

/// The right-hand side of an `IS [NOT]` test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IsValue {
    /// `IS NULL`
    Null,
    /// `IS TRUE`
    True,
    /// `IS FALSE`
    False,
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionCall {
    /// The function name.
    pub name: String,
    /// The arguments.
    pub args: Vec<Expr>,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// `*`.
    Star,

    /// A bare identifier (column reference).
    Ident(String),

    /// A `@name` query parameter; the name excludes the `@`.
    Param(String),

    /// A parenthesized expression.
    Paren(Box<Expr>),

    /// A function call.
    Function(FunctionCall),

    /// `left AND right` or `left OR right`.
    Logical {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: LogicalOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// `NOT operand`.
    Not(Box<Expr>),

    /// `expr IS [NOT] {NULL | TRUE | FALSE}`.
    Is {
        /// The tested expression.
        expr: Box<Expr>,
        /// Whether this is `IS NOT`.
        negated: bool,
        /// What the expression is compared with.
        value: IsValue,
    },

    /// A binary comparison.
    Comparison {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: ComparisonOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// `expr [NOT] BETWEEN low AND high`.
    Between {
        /// The tested expression.
        expr: Box<Expr>,
        /// Whether this is `NOT BETWEEN`.
        negated: bool,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
    },
}

impl Expr {
    /// Creates an identifier reference.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Combines two operands with `AND` or `OR`.
    #[must_use]
    pub fn logical(left: Self, op: LogicalOp, right: Self) -> Self {
        Self::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a binary comparison.
    #[must_use]
    pub fn comparison(left: Self, op: ComparisonOp, right: Self) -> Self {
        Self::Comparison {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Returns true if the expression may evaluate to a boolean.
    ///
    /// Identifiers, parameters, function calls and parenthesized expressions
    /// count since their type is only known after name resolution. `NULL` is
    /// a valid boolean operand.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        match self {
            Self::Literal(Literal::Bool(_) | Literal::Null)
            | Self::Ident(_)
            | Self::Param(_)
            | Self::Paren(_)
            | Self::Function(_)
            | Self::Logical { .. }
            | Self::Not(_)
            | Self::Is { .. }
            | Self::Comparison { .. }
            | Self::Between { .. } => true,
            Self::Literal(Literal::Integer(_) | Literal::Float(_) | Literal::String(_))
            | Self::Star => false,
        }
    }

    /// A short description of the expression's kind, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Literal(Literal::Integer(_)) => "integer literal",
            Self::Literal(Literal::Float(_)) => "float literal",
            Self::Literal(Literal::String(_)) => "string literal",
            Self::Literal(Literal::Bool(_)) => "boolean literal",
            Self::Literal(Literal::Null) => "NULL literal",
            Self::Star => "star",
            Self::Ident(_) => "identifier",
            Self::Param(_) => "parameter",
            Self::Paren(_) => "parenthesized expression",
            Self::Function(_) => "function call",
            Self::Logical { .. } | Self::Not(_) => "logical operation",
            Self::Is { .. } => "IS test",
            Self::Comparison { .. } | Self::Between { .. } => "comparison",
        }
    }
}
