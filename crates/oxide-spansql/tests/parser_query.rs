//! Tests for queries: SELECT lists, FROM, TABLESAMPLE, WHERE, ORDER BY and
//! LIMIT.

mod common;
use common::*;

use oxide_spansql::ast::{
    ComparisonOp, Expr, Limit, Order, SampleMethod, SampleSize, SelectFrom, TableSample,
};

#[test]
fn select_from_where_limit_param() {
    let q = query("SELECT A, B FROM T WHERE A = 1 LIMIT @n");
    assert_eq!(q.select.list, vec![id("A"), id("B")]);
    assert_eq!(
        q.select.from,
        vec![SelectFrom {
            table: String::from("T"),
            table_sample: None,
        }]
    );
    assert_eq!(
        q.select.where_clause,
        Some(Expr::comparison(id("A"), ComparisonOp::Eq, Expr::integer(1)))
    );
    assert!(q.order.is_empty());
    assert_eq!(q.limit, Some(Limit::Param(String::from("n"))));
}

#[test]
fn select_without_from() {
    let q = query("SELECT 1");
    assert_eq!(q.select.list, vec![Expr::integer(1)]);
    assert!(q.select.from.is_empty());
    assert_eq!(q.select.where_clause, None);
    assert_eq!(q.limit, None);
}

#[test]
fn select_star() {
    let q = query("SELECT * FROM Singers");
    assert_eq!(q.select.list, vec![Expr::Star]);
}

#[test]
fn select_from_multiple_tables() {
    let q = query("SELECT A FROM T1, T2");
    let tables: Vec<&str> = q.select.from.iter().map(|f| f.table.as_str()).collect();
    assert_eq!(tables, ["T1", "T2"]);
}

#[test]
fn tablesample_bernoulli_percent() {
    let q = query("SELECT A FROM T TABLESAMPLE BERNOULLI (10 PERCENT)");
    assert_eq!(
        q.select.from[0].table_sample,
        Some(TableSample {
            method: SampleMethod::Bernoulli,
            size: Expr::integer(10),
            size_type: SampleSize::Percent,
        })
    );
}

#[test]
fn tablesample_reservoir_rows_then_more_tables() {
    let q = query("SELECT A FROM T TABLESAMPLE RESERVOIR (@n ROWS), U WHERE A");
    let sample = q.select.from[0].table_sample.as_ref().unwrap();
    assert_eq!(sample.method, SampleMethod::Reservoir);
    assert_eq!(sample.size, Expr::Param(String::from("n")));
    assert_eq!(sample.size_type, SampleSize::Rows);
    assert_eq!(q.select.from[1].table, "U");
    assert_eq!(q.select.from[1].table_sample, None);
}

#[test]
fn order_by() {
    let q = query("SELECT A FROM T ORDER BY A DESC, B, C ASC");
    assert_eq!(
        q.order,
        vec![
            Order {
                expr: id("A"),
                desc: true
            },
            Order {
                expr: id("B"),
                desc: false
            },
            Order {
                expr: id("C"),
                desc: false
            },
        ]
    );
}

#[test]
fn order_by_then_limit() {
    let q = query("SELECT A FROM T ORDER BY A LIMIT 10");
    assert_eq!(q.order.len(), 1);
    assert_eq!(q.limit, Some(Limit::Integer(10)));
}

#[test]
fn where_with_function_call() {
    let q = query(r#"SELECT A FROM T WHERE STARTS_WITH(Name, "x") AND A IS NOT NULL"#);
    assert!(q.select.where_clause.is_some());
}

#[test]
fn query_with_comments() {
    let q = query("SELECT A -- first\n FROM T /* table */ LIMIT 5 # done\n");
    assert_eq!(q.limit, Some(Limit::Integer(5)));
}

#[test]
fn query_deterministic() {
    let text = "SELECT A, COUNT(*) FROM T WHERE A BETWEEN 1 AND 2 OR NOT B ORDER BY A LIMIT 3";
    assert_eq!(query(text), query(text));
}
