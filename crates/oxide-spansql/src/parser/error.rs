//! Parser error types.

use thiserror::Error;

use crate::lexer::Span;

/// What went wrong during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The input was exhausted. Not an error on its own; entry points and
    /// optional clauses treat it as a normal terminator.
    #[error("unexpected end of input")]
    Eof,

    // Lexical errors.
    /// A `#`, `--` or `/*` comment has no terminator.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// A string literal has no closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A string literal contains a malformed escape sequence.
    #[error("invalid string literal {literal:?}: {reason}")]
    InvalidString {
        /// The literal as written, quotes included.
        literal: String,
        /// Why it could not be decoded.
        reason: &'static str,
    },
    /// A numeric literal has a sign or prefix but no digits.
    #[error("no digits in numeric literal")]
    NoDigits,
    /// A numeric literal has a misplaced `.` or a second exponent.
    #[error("bad token {0:?}")]
    BadNumber(String),
    /// A numeric literal could not be decoded (out of range, dangling exponent).
    #[error("bad numeric literal {literal:?}: {reason}")]
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// The decoder's complaint.
        reason: String,
    },
    /// A byte that starts no token.
    #[error("unexpected byte {0:#04x}")]
    UnexpectedByte(u8),

    // Syntax errors.
    /// A specific token was required.
    #[error("got {found:?} while expecting {wanted:?}")]
    Mismatch {
        /// The token that was found.
        found: String,
        /// The token that was required.
        wanted: String,
    },
    /// The token fits none of the alternatives of a clause.
    #[error("got {found:?}, want {wanted}")]
    Unexpected {
        /// The token that was found.
        found: String,
        /// Description of the acceptable alternatives.
        wanted: &'static str,
    },
    /// The statement starts with a token no DDL statement starts with.
    #[error("unknown DDL statement starting with {0:?}")]
    UnknownStatement(String),

    // Shape errors.
    /// An operand of OR/AND/NOT or a WHERE clause cannot be boolean.
    #[error("got {found}, want a boolean expression")]
    NotBoolean {
        /// The kind of expression that was found.
        found: &'static str,
    },
    /// LIMIT was given something other than an integer literal or parameter.
    #[error("got {0:?}, want literal or parameter")]
    InvalidLimit(String),

    /// Input remained after a complete parse.
    #[error("unexpected trailing contents {0:?}")]
    TrailingContents(String),
}

/// A parse error with the location it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {span}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The offending token or byte.
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub const fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The end-of-input signal at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self::new(ErrorKind::Eof, Span::at(offset))
    }

    /// Returns true if this is the end-of-input signal rather than a real error.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::Eof)
    }
}
