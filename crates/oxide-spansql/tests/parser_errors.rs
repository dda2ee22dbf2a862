//! Tests for parser error cases.

mod common;
use common::*;

use oxide_spansql::{parse_ddl, ErrorKind, Span};

fn unexpected(found: &str, wanted: &'static str) -> ErrorKind {
    ErrorKind::Unexpected {
        found: String::from(found),
        wanted,
    }
}

// ===================================================================
// Consumption
// ===================================================================

#[test]
fn error_trailing_after_statement() {
    let err = stmt_err("CREATE TABLE T (A INT64) PRIMARY KEY (A) extra");
    assert_eq!(err.kind, ErrorKind::TrailingContents(String::from("extra")));
    assert_eq!(err.span, Span::new(41, 46));
}

#[test]
fn error_semicolon_after_single_statement() {
    let err = stmt_err("DROP TABLE T;");
    assert_eq!(err.kind, ErrorKind::TrailingContents(String::from(";")));
}

#[test]
fn error_unmatched_paren_in_query() {
    let err = query_err("SELECT 1 )");
    assert_eq!(err.kind, ErrorKind::TrailingContents(String::from(")")));
}

#[test]
fn error_garbage_between_statements() {
    let err = parse_ddl("DROP TABLE A DROP TABLE B").unwrap_err();
    assert_eq!(err.kind, unexpected("DROP", "\";\" or end of input"));
}

#[test]
fn error_empty_statement() {
    assert!(stmt_err("").is_eof());
    assert!(stmt_err("-- only a comment\n").is_eof());
}

#[test]
fn error_empty_query() {
    assert!(query_err("").is_eof());
}

// ===================================================================
// Statements
// ===================================================================

#[test]
fn error_unknown_statement() {
    let err = stmt_err("TRUNCATE T");
    assert_eq!(err.kind, ErrorKind::UnknownStatement(String::from("TRUNCATE")));
    assert_eq!(
        err.to_string(),
        "unknown DDL statement starting with \"TRUNCATE\" at position 0..8"
    );
}

#[test]
fn error_lowercase_keywords() {
    assert_eq!(
        stmt_err("drop table T").kind,
        ErrorKind::UnknownStatement(String::from("drop"))
    );
}

#[test]
fn error_drop_view() {
    assert_eq!(stmt_err("DROP VIEW V").kind, unexpected("VIEW", "TABLE or INDEX"));
}

#[test]
fn error_alter_table_rename() {
    assert_eq!(
        stmt_err("ALTER TABLE T RENAME TO U").kind,
        unexpected("RENAME", "ADD or DROP or SET")
    );
}

#[test]
fn error_bad_on_delete() {
    assert_eq!(
        stmt_err("ALTER TABLE T SET ON DELETE RESTRICT").kind,
        unexpected("RESTRICT", "NO or CASCADE")
    );
}

#[test]
fn error_missing_primary_key() {
    assert_eq!(
        stmt_err("CREATE TABLE T (A INT64) INTERLEAVE IN PARENT P").kind,
        ErrorKind::Mismatch {
            found: String::from("INTERLEAVE"),
            wanted: String::from("PRIMARY"),
        }
    );
    assert!(stmt_err("CREATE TABLE T (A INT64)").is_eof());
}

#[test]
fn error_name_must_be_identifier() {
    assert_eq!(stmt_err("DROP TABLE 7").kind, unexpected("7", "identifier"));
    assert_eq!(
        stmt_err(r#"DROP INDEX "Idx""#).kind,
        unexpected("\"Idx\"", "identifier")
    );
}

#[test]
fn error_missing_list_separator() {
    assert_eq!(
        stmt_err("CREATE TABLE T (A INT64 B INT64) PRIMARY KEY (A)").kind,
        unexpected("B", "\")\" or \",\"")
    );
}

// ===================================================================
// Expression shape
// ===================================================================

#[test]
fn error_or_of_integers() {
    let err = query_err("SELECT 1 OR 2");
    assert_eq!(
        err.kind,
        ErrorKind::NotBoolean {
            found: "integer literal"
        }
    );
    assert_eq!(err.span, Span::new(9, 11));
}

#[test]
fn error_and_with_string_rhs() {
    assert_eq!(
        query_err(r#"SELECT A AND "x""#).kind,
        ErrorKind::NotBoolean {
            found: "string literal"
        }
    );
}

#[test]
fn error_where_not_boolean() {
    let err = query_err("SELECT * FROM T WHERE 7");
    assert_eq!(
        err.kind,
        ErrorKind::NotBoolean {
            found: "integer literal"
        }
    );
    assert_eq!(err.span.start, 22);
}

#[test]
fn error_not_of_float() {
    assert_eq!(
        query_err("SELECT NOT 1.5").kind,
        ErrorKind::NotBoolean {
            found: "float literal"
        }
    );
}

#[test]
fn error_limit_identifier() {
    assert_eq!(
        query_err("SELECT A FROM T LIMIT A").kind,
        ErrorKind::InvalidLimit(String::from("A"))
    );
}

#[test]
fn error_limit_float() {
    assert_eq!(
        query_err("SELECT A FROM T LIMIT 1.5").kind,
        ErrorKind::InvalidLimit(String::from("1.5"))
    );
}

// ===================================================================
// Clauses
// ===================================================================

#[test]
fn error_between_without_and() {
    assert_eq!(
        query_err("SELECT * FROM T WHERE A BETWEEN 1 OR 2").kind,
        ErrorKind::Mismatch {
            found: String::from("OR"),
            wanted: String::from("AND"),
        }
    );
}

#[test]
fn error_not_in() {
    assert_eq!(
        query_err("SELECT * FROM T WHERE A NOT IN (1)").kind,
        unexpected("IN", "LIKE or BETWEEN")
    );
}

#[test]
fn error_is_unknown() {
    assert_eq!(
        query_err("SELECT * FROM T WHERE A IS UNKNOWN").kind,
        unexpected("UNKNOWN", "NULL or TRUE or FALSE")
    );
}

#[test]
fn error_tablesample_missing_unit() {
    assert_eq!(
        query_err("SELECT A FROM T TABLESAMPLE BERNOULLI (10)").kind,
        unexpected(")", "PERCENT or ROWS")
    );
}

#[test]
fn error_tablesample_unknown_method() {
    assert_eq!(
        query_err("SELECT A FROM T TABLESAMPLE SYSTEM (10 PERCENT)").kind,
        unexpected("SYSTEM", "BERNOULLI or RESERVOIR")
    );
}

#[test]
fn error_unclosed_paren() {
    assert!(query_err("SELECT (1").is_eof());
}

#[test]
fn error_punctuation_not_callable() {
    assert_eq!(
        query_err("SELECT - (A)").kind,
        ErrorKind::TrailingContents(String::from("(A)"))
    );
}

#[test]
fn error_missing_expression() {
    assert!(query_err("SELECT").is_eof());
}

// ===================================================================
// Lexical
// ===================================================================

#[test]
fn error_unexpected_byte() {
    let err = query_err("SELECT $");
    assert_eq!(err.kind, ErrorKind::UnexpectedByte(b'$'));
    assert_eq!(err.span, Span::new(7, 8));
}

#[test]
fn error_unlexable_leftover() {
    let err = stmt_err("DROP TABLE T $");
    assert_eq!(err.kind, ErrorKind::TrailingContents(String::from("$")));
    assert_eq!(err.span, Span::new(13, 14));
}

#[test]
fn error_unterminated_comment() {
    assert_eq!(stmt_err("DROP TABLE /* T").kind, ErrorKind::UnterminatedComment);
}

#[test]
fn error_unterminated_trailing_comment() {
    let err = query_err("SELECT 1 /* never closed");
    assert_eq!(
        err.kind,
        ErrorKind::TrailingContents(String::from("/* never closed"))
    );
    assert_eq!(err.span.start, 9);
}

#[test]
fn error_unterminated_line_comment() {
    assert_eq!(
        stmt_err("DROP TABLE T # no newline").kind,
        ErrorKind::TrailingContents(String::from("# no newline"))
    );
}

#[test]
fn error_newline_in_string() {
    assert!(matches!(
        query_err("SELECT \"a\nb\"").kind,
        ErrorKind::InvalidString { .. }
    ));
}
