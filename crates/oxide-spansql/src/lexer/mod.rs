//! Lexer
//!
//! A hand-written byte-level scanner that turns source text into tokens,
//! skipping whitespace and comments. It knows nothing about keywords: every
//! word, parameter, punctuation mark and operator is a [`TokenKind::Plain`]
//! token whose meaning the grammar decides from its text.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub(crate) use token::is_identifier_name;
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
