//! Token types for the lexer.

use super::Span;

/// Classification of a lexeme.
///
/// Keywords are not distinguished from identifiers here; the grammar decides
/// what a [`TokenKind::Plain`] token means from its text.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Identifier, keyword, `@parameter`, punctuation or operator.
    Plain,
    /// Decimal or hexadecimal integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// Double-quoted string literal, unescaped.
    String(String),
}

/// Returns true if `text` starts like a name: an ASCII letter or `_`.
pub(crate) fn is_identifier_name(text: &str) -> bool {
    text.as_bytes()
        .first()
        .is_some_and(|&c| c.is_ascii_alphabetic() || c == b'_')
}

/// A token: the exact consumed text, its classification and its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// The raw text of the lexeme, exactly as it appears in the input.
    pub text: &'a str,
    /// The kind of token, with the decoded value for literals.
    pub kind: TokenKind,
    /// Location of `text` in the input.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(text: &'a str, kind: TokenKind, span: Span) -> Self {
        Self { text, kind, span }
    }

    /// Returns true if the token's text is exactly `text`.
    #[must_use]
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }

    /// Returns true if the token can name a table, column, index or function.
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Plain) && is_identifier_name(self.text)
    }

    /// Returns true if the token is a `@name` query parameter.
    #[must_use]
    pub fn is_param(&self) -> bool {
        matches!(self.kind, TokenKind::Plain) && self.text.starts_with('@')
    }
}
