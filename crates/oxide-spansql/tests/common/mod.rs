#![allow(dead_code)]

use oxide_spansql::ast::{CreateIndex, CreateTable, Expr, Query, Statement};
use oxide_spansql::{parse_ddl_stmt, parse_query, ParseError};

pub fn stmt(sql: &str) -> Statement {
    parse_ddl_stmt(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn stmt_err(sql: &str) -> ParseError {
    parse_ddl_stmt(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn query(sql: &str) -> Query {
    parse_query(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn query_err(sql: &str) -> ParseError {
    parse_query(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn create_table(sql: &str) -> CreateTable {
    match stmt(sql) {
        Statement::CreateTable(ct) => ct,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn create_index(sql: &str) -> CreateIndex {
    match stmt(sql) {
        Statement::CreateIndex(ci) => ci,
        other => panic!("Expected CREATE INDEX, got {other:?}"),
    }
}

/// Parses `SELECT <expr>` and returns the single projected expression.
pub fn expr(text: &str) -> Expr {
    let sql = format!("SELECT {text}");
    let mut q = query(&sql);
    assert_eq!(q.select.list.len(), 1, "expected one expression in {sql}");
    q.select.list.remove(0)
}

/// Parses `SELECT * FROM T WHERE <cond>` and returns the condition.
pub fn where_clause(cond: &str) -> Expr {
    let sql = format!("SELECT * FROM T WHERE {cond}");
    query(&sql)
        .select
        .where_clause
        .unwrap_or_else(|| panic!("no WHERE clause in {sql}"))
}

pub fn id(name: &str) -> Expr {
    Expr::ident(name)
}
