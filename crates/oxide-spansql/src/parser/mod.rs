//! DDL and query parser
//!
//! A hand-written recursive descent parser over a cursor with one token of
//! pushback. Expressions use a fixed ladder of precedence levels.

mod cursor;
mod error;
mod expression;
mod parser;

pub use cursor::{Cursor, Lexeme};
pub use error::{ErrorKind, ParseError};
pub use parser::Parser;
