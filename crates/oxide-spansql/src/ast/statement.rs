//! DDL statement AST types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::Type;

/// A parsed DDL file: statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ddl {
    /// The statements.
    pub statements: Vec<Statement>,
}

/// A single DDL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Statement {
    /// `CREATE TABLE`.
    CreateTable(CreateTable),
    /// `CREATE [UNIQUE] [NULL_FILTERED] INDEX`.
    CreateIndex(CreateIndex),
    /// `ALTER TABLE`.
    AlterTable(AlterTable),
    /// `DROP TABLE`.
    DropTable {
        /// Table name.
        name: String,
    },
    /// `DROP INDEX`.
    DropIndex {
        /// Index name.
        name: String,
    },
}

impl Statement {
    /// Returns the name of the table or index the statement is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::CreateTable(ct) => &ct.name,
            Self::CreateIndex(ci) => &ci.name,
            Self::AlterTable(at) => &at.name,
            Self::DropTable { name } | Self::DropIndex { name } => name,
        }
    }
}

/// `CREATE TABLE name (columns) PRIMARY KEY (key) [, INTERLEAVE IN PARENT ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateTable {
    /// Table name.
    pub name: String,
    /// Column definitions, in declaration order.
    pub columns: Vec<ColumnDef>,
    /// Primary key parts, in key order.
    pub primary_key: Vec<KeyPart>,
    /// Parent table, for interleaved tables.
    pub interleave: Option<Interleave>,
}

/// `name type [NOT NULL]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Column type.
    pub ty: Type,
    /// Whether `NOT NULL` was given.
    pub not_null: bool,
}

/// A key column with its sort direction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPart {
    /// Column name.
    pub column: String,
    /// Whether `DESC` was given; ascending otherwise.
    pub desc: bool,
}

/// `INTERLEAVE IN PARENT parent [ON DELETE action]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interleave {
    /// Parent table name.
    pub parent: String,
    /// What happens to child rows when the parent row is deleted.
    pub on_delete: OnDelete,
}

/// `ON DELETE` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OnDelete {
    /// `CASCADE`.
    Cascade,
    /// `NO ACTION`, the default.
    #[default]
    NoAction,
}

impl OnDelete {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::NoAction => "NO ACTION",
        }
    }
}

/// `CREATE [UNIQUE] [NULL_FILTERED] INDEX name ON table (key)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateIndex {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// Whether `UNIQUE` was given.
    pub unique: bool,
    /// Whether `NULL_FILTERED` was given.
    pub null_filtered: bool,
    /// Index key parts.
    pub columns: Vec<KeyPart>,
}

/// `ALTER TABLE name alteration`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlterTable {
    /// Table name.
    pub name: String,
    /// The change to apply.
    pub alteration: Alteration,
}

/// The change an `ALTER TABLE` makes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alteration {
    /// `ADD COLUMN column_def`.
    AddColumn(ColumnDef),
    /// `DROP COLUMN name`.
    DropColumn(String),
    /// `SET ON DELETE action`.
    SetOnDelete(OnDelete),
}
