//! # oxide-spansql
//!
//! A parser for the Cloud Spanner DDL and query dialect.
//!
//! This crate provides:
//! - A lexer producing tokens with byte spans, numeric values and unescaped
//!   string contents
//! - A recursive descent parser for `CREATE TABLE`, `CREATE INDEX`,
//!   `ALTER TABLE`, `DROP TABLE` and `DROP INDEX`
//! - A query parser for `SELECT ... FROM ... WHERE ... ORDER BY ... LIMIT`
//!
//! The parser is purely syntactic: it does not resolve names or check types,
//! except that the operands of `AND`, `OR` and `WHERE` must be able to
//! evaluate to a boolean.
//!
//! ## Parsing DDL
//!
//! ```rust
//! use oxide_spansql::{parse_ddl, Statement};
//!
//! let ddl = parse_ddl(
//!     "CREATE TABLE Singers (SingerId INT64 NOT NULL, Name STRING(MAX)) \
//!      PRIMARY KEY (SingerId);
//!      DROP INDEX SingersByName;",
//! )
//! .unwrap();
//!
//! assert_eq!(ddl.statements.len(), 2);
//! assert!(matches!(ddl.statements[0], Statement::CreateTable(_)));
//! ```
//!
//! ## Parsing queries
//!
//! ```rust
//! use oxide_spansql::{parse_query, Limit};
//!
//! let query = parse_query("SELECT A, B FROM Singers WHERE A > 7 LIMIT @n").unwrap();
//! assert_eq!(query.select.list.len(), 2);
//! assert_eq!(query.limit, Some(Limit::Param(String::from("n"))));
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`ParseError`] carrying an [`ErrorKind`] and the byte
//! span it refers to:
//!
//! ```rust
//! use oxide_spansql::{parse_query, ErrorKind};
//!
//! let err = parse_query("SELECT 1 OR 2").unwrap_err();
//! assert!(matches!(err.kind, ErrorKind::NotBoolean { .. }));
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

use tracing::debug;

pub use ast::{Ddl, Expr, Limit, Query, Statement, Type};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use parser::{ErrorKind, ParseError, Parser};

/// Parses a DDL file: zero or more statements separated by `;`.
///
/// # Errors
///
/// Returns the first lexical or syntax error.
pub fn parse_ddl(input: &str) -> Result<Ddl, ParseError> {
    Parser::new(input)
        .parse_ddl()
        .inspect_err(|e| debug!(error = %e, "failed to parse DDL"))
}

/// Parses exactly one DDL statement, with no trailing `;`.
///
/// # Errors
///
/// Returns the first lexical or syntax error, or
/// [`ErrorKind::TrailingContents`] if anything follows the statement.
pub fn parse_ddl_stmt(input: &str) -> Result<Statement, ParseError> {
    let mut parser = Parser::new(input);
    parser
        .parse_statement()
        .and_then(|stmt| parser.finish().map(|()| stmt))
        .inspect_err(|e| debug!(error = %e, "failed to parse DDL statement"))
}

/// Parses one query.
///
/// # Errors
///
/// Returns the first lexical, syntax or shape error, or
/// [`ErrorKind::TrailingContents`] if anything follows the query.
pub fn parse_query(input: &str) -> Result<Query, ParseError> {
    let mut parser = Parser::new(input);
    parser
        .parse_query()
        .and_then(|query| parser.finish().map(|()| query))
        .inspect_err(|e| debug!(error = %e, "failed to parse query"))
}
