//! Abstract Syntax Tree (AST) types for DDL statements and queries.
//!
//! Nodes are plain owned values: each tree owns its children and nothing is
//! shared between trees.

mod expression;
mod query;
mod statement;
mod types;

pub use expression::{ComparisonOp, Expr, FunctionCall, IsValue, Literal, LogicalOp};
pub use query::{Limit, Order, Query, SampleMethod, SampleSize, Select, SelectFrom, TableSample};
pub use statement::{
    AlterTable, Alteration, ColumnDef, CreateIndex, CreateTable, Ddl, Interleave, KeyPart,
    OnDelete, Statement,
};
pub use types::{Length, Type, TypeBase};
