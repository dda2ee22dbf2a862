//! Statement, type and query grammar.

use tracing::trace;

use super::cursor::Cursor;
use super::error::{ErrorKind, ParseError};
use crate::ast::{
    AlterTable, Alteration, ColumnDef, CreateIndex, CreateTable, Ddl, Interleave, KeyPart, Length,
    Limit, OnDelete, Order, Query, SampleMethod, SampleSize, Select, SelectFrom, Statement,
    TableSample, Type, TypeBase,
};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser over a single input.
///
/// The `parse_*` methods consume one production each and leave the rest of
/// the input alone; call [`Parser::finish`] to require that nothing is left.
pub struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// The unconsumed input, with leading whitespace and comments skipped.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        self.cursor.remainder()
    }

    /// Requires that the whole input has been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TrailingContents`] if anything but whitespace and
    /// comments remains.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        self.cursor.finish()
    }

    /// Parses a DDL file: statements separated by `;`, with an optional `;`
    /// after the last one. The whole input must be consumed.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntax error.
    pub fn parse_ddl(&mut self) -> Result<Ddl, ParseError> {
        let mut ddl = Ddl::default();
        while !self.cursor.at_end()? {
            ddl.statements.push(self.parse_statement()?);

            match self.cursor.next() {
                Ok(tok) if tok.is(";") => {}
                Ok(tok) => return Err(self.unexpected(&tok, "\";\" or end of input")),
                Err(e) if e.is_eof() => break,
                Err(e) => return Err(e),
            }
        }
        self.finish()?;
        Ok(ddl)
    }

    /// Parses one DDL statement.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownStatement`] if the input does not start
    /// with `CREATE`, `ALTER TABLE` or `DROP`, or the first error inside the
    /// statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        trace!(rem = self.remainder(), "parse_statement");

        if self.cursor.sniff(&["CREATE", "TABLE"]) {
            Ok(Statement::CreateTable(self.parse_create_table()?))
        } else if self.cursor.sniff(&["CREATE"]) {
            // CREATE INDEX is the only other statement starting with CREATE;
            // UNIQUE or NULL_FILTERED may come between the two.
            Ok(Statement::CreateIndex(self.parse_create_index()?))
        } else if self.cursor.sniff(&["ALTER", "TABLE"]) {
            Ok(Statement::AlterTable(self.parse_alter_table()?))
        } else if self.cursor.accept("DROP") {
            let tok = self.cursor.next()?;
            match tok.text {
                "TABLE" => Ok(Statement::DropTable {
                    name: self.parse_name()?,
                }),
                "INDEX" => Ok(Statement::DropIndex {
                    name: self.parse_name()?,
                }),
                _ => Err(self.unexpected(&tok, "TABLE or INDEX")),
            }
        } else {
            let tok = self.cursor.next()?;
            Err(self
                .cursor
                .fail(ErrorKind::UnknownStatement(String::from(tok.text)), tok.span))
        }
    }

    /// `CREATE TABLE name ( [column_def, ...] ) PRIMARY KEY ( [key_part, ...] )
    /// [, INTERLEAVE IN PARENT name [ON DELETE {CASCADE | NO ACTION}]]`
    fn parse_create_table(&mut self) -> Result<CreateTable, ParseError> {
        trace!(rem = self.remainder(), "parse_create_table");

        self.cursor.expect("CREATE")?;
        self.cursor.expect("TABLE")?;
        let name = self.parse_name()?;
        let columns = self.parse_paren_list(Self::parse_column_def)?;

        self.cursor.expect("PRIMARY")?;
        self.cursor.expect("KEY")?;
        let primary_key = self.parse_paren_list(Self::parse_key_part)?;

        let interleave = if self.cursor.sniff(&[",", "INTERLEAVE"]) {
            self.cursor.expect(",")?;
            self.cursor.expect("INTERLEAVE")?;
            self.cursor.expect("IN")?;
            self.cursor.expect("PARENT")?;
            let parent = self.parse_name()?;

            let on_delete = if self.cursor.sniff(&["ON", "DELETE"]) {
                self.cursor.expect("ON")?;
                self.cursor.expect("DELETE")?;
                self.parse_on_delete()?
            } else {
                OnDelete::default()
            };
            Some(Interleave { parent, on_delete })
        } else {
            None
        };

        Ok(CreateTable {
            name,
            columns,
            primary_key,
            interleave,
        })
    }

    /// `CREATE [UNIQUE] [NULL_FILTERED] INDEX name ON table ( key_part [, ...] )`
    fn parse_create_index(&mut self) -> Result<CreateIndex, ParseError> {
        trace!(rem = self.remainder(), "parse_create_index");

        self.cursor.expect("CREATE")?;
        let unique = self.cursor.accept("UNIQUE");
        let null_filtered = self.cursor.accept("NULL_FILTERED");
        self.cursor.expect("INDEX")?;
        let name = self.parse_name()?;
        self.cursor.expect("ON")?;
        let table = self.parse_name()?;
        let columns = self.parse_paren_list(Self::parse_key_part)?;

        Ok(CreateIndex {
            name,
            table,
            unique,
            null_filtered,
            columns,
        })
    }

    /// `ALTER TABLE name { ADD COLUMN column_def | DROP COLUMN name |
    /// SET ON DELETE {CASCADE | NO ACTION} }`
    fn parse_alter_table(&mut self) -> Result<AlterTable, ParseError> {
        trace!(rem = self.remainder(), "parse_alter_table");

        self.cursor.expect("ALTER")?;
        self.cursor.expect("TABLE")?;
        let name = self.parse_name()?;

        let tok = self.cursor.next()?;
        let alteration = match tok.text {
            "ADD" => {
                self.cursor.expect("COLUMN")?;
                Alteration::AddColumn(self.parse_column_def()?)
            }
            "DROP" => {
                self.cursor.expect("COLUMN")?;
                Alteration::DropColumn(self.parse_name()?)
            }
            "SET" => {
                self.cursor.expect("ON")?;
                self.cursor.expect("DELETE")?;
                Alteration::SetOnDelete(self.parse_on_delete()?)
            }
            _ => return Err(self.unexpected(&tok, "ADD or DROP or SET")),
        };

        Ok(AlterTable { name, alteration })
    }

    /// `name type [NOT NULL]`
    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        trace!(rem = self.remainder(), "parse_column_def");

        let name = self.parse_name()?;
        let ty = self.parse_type()?;
        let not_null = if self.cursor.accept("NOT") {
            self.cursor.expect("NULL")?;
            true
        } else {
            false
        };

        Ok(ColumnDef { name, ty, not_null })
    }

    /// `column [{ASC | DESC}]`
    fn parse_key_part(&mut self) -> Result<KeyPart, ParseError> {
        let column = self.parse_name()?;
        let desc = self.parse_direction();
        Ok(KeyPart { column, desc })
    }

    /// Consumes an optional `ASC` or `DESC`; true for `DESC`.
    fn parse_direction(&mut self) -> bool {
        match self.cursor.next() {
            Ok(tok) if tok.is("DESC") => true,
            Ok(tok) if tok.is("ASC") => false,
            _ => {
                self.cursor.back();
                false
            }
        }
    }

    /// `CASCADE` or `NO ACTION`.
    fn parse_on_delete(&mut self) -> Result<OnDelete, ParseError> {
        let tok = self.cursor.next()?;
        match tok.text {
            "CASCADE" => Ok(OnDelete::Cascade),
            "NO" => {
                self.cursor.expect("ACTION")?;
                Ok(OnDelete::NoAction)
            }
            _ => Err(self.unexpected(&tok, "NO or CASCADE")),
        }
    }

    /// `ARRAY< scalar_type >` or `scalar_type`, where `STRING` and `BYTES`
    /// take a mandatory `( {int64 | MAX} )` length.
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        trace!(rem = self.remainder(), "parse_type");

        let mut tok = self.cursor.next()?;
        let array = tok.is("ARRAY");
        if array {
            self.cursor.expect("<")?;
            tok = self.cursor.next()?;
        }

        let Some(base) = TypeBase::from_keyword(tok.text) else {
            return Err(self.unexpected(&tok, "scalar type"));
        };

        let len = if base.has_length() {
            self.cursor.expect("(")?;
            let tok = self.cursor.next()?;
            let len = match tok.kind {
                TokenKind::Plain if tok.is("MAX") => Length::Max,
                TokenKind::Integer(n) => Length::Fixed(n),
                _ => return Err(self.unexpected(&tok, "MAX or int64")),
            };
            self.cursor.expect(")")?;
            Some(len)
        } else {
            None
        };

        if array {
            self.cursor.expect(">")?;
        }

        Ok(Type { base, array, len })
    }

    /// A table, index or column name.
    fn parse_name(&mut self) -> Result<String, ParseError> {
        let tok = self.cursor.next()?;
        if tok.is_identifier() {
            Ok(String::from(tok.text))
        } else {
            Err(self.unexpected(&tok, "identifier"))
        }
    }

    /// `( [item, ...] )`. A `,` directly before the `)` is tolerated.
    pub(super) fn parse_paren_list<T>(
        &mut self,
        item: fn(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        self.cursor.expect("(")?;
        let mut items = Vec::new();
        loop {
            if self.cursor.accept(")") {
                break;
            }
            items.push(item(self)?);

            let tok = self.cursor.next()?;
            if tok.is(")") {
                break;
            }
            if !tok.is(",") {
                return Err(self.unexpected(&tok, "\")\" or \",\""));
            }
        }
        Ok(items)
    }

    /// Parses a query: `select [ORDER BY expr [{ASC | DESC}] [, ...]] [LIMIT count]`.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, syntax or shape error.
    pub fn parse_query(&mut self) -> Result<Query, ParseError> {
        trace!(rem = self.remainder(), "parse_query");

        let select = self.parse_select()?;

        let mut order = Vec::new();
        if self.cursor.sniff(&["ORDER", "BY"]) {
            self.cursor.expect("ORDER")?;
            self.cursor.expect("BY")?;
            loop {
                let expr = self.parse_expr()?;
                let desc = self.parse_direction();
                order.push(Order { expr, desc });
                if !self.cursor.accept(",") {
                    break;
                }
            }
        }

        let limit = if self.cursor.accept("LIMIT") {
            Some(self.parse_limit()?)
        } else {
            None
        };

        Ok(Query {
            select,
            order,
            limit,
        })
    }

    /// `SELECT expr [, ...] [FROM from_item [, ...]] [WHERE bool_expr]`
    fn parse_select(&mut self) -> Result<Select, ParseError> {
        trace!(rem = self.remainder(), "parse_select");

        self.cursor.expect("SELECT")?;

        let mut list = Vec::new();
        loop {
            list.push(self.parse_expr()?);
            if !self.cursor.accept(",") {
                break;
            }
        }

        let mut from = Vec::new();
        if self.cursor.accept("FROM") {
            loop {
                let table = self.parse_name()?;
                let table_sample = if self.cursor.sniff(&["TABLESAMPLE"]) {
                    Some(self.parse_table_sample()?)
                } else {
                    None
                };
                from.push(SelectFrom {
                    table,
                    table_sample,
                });
                if !self.cursor.accept(",") {
                    break;
                }
            }
        }

        let where_clause = if self.cursor.accept("WHERE") {
            Some(self.parse_bool_expr()?)
        } else {
            None
        };

        Ok(Select {
            list,
            from,
            where_clause,
        })
    }

    /// `TABLESAMPLE {BERNOULLI | RESERVOIR} ( size {PERCENT | ROWS} )`
    fn parse_table_sample(&mut self) -> Result<TableSample, ParseError> {
        trace!(rem = self.remainder(), "parse_table_sample");

        self.cursor.expect("TABLESAMPLE")?;

        let tok = self.cursor.next()?;
        let Some(method) = SampleMethod::from_keyword(tok.text) else {
            return Err(self.unexpected(&tok, "BERNOULLI or RESERVOIR"));
        };

        self.cursor.expect("(")?;
        let size = self.parse_expr()?;

        let tok = self.cursor.next()?;
        let Some(size_type) = SampleSize::from_keyword(tok.text) else {
            return Err(self.unexpected(&tok, "PERCENT or ROWS"));
        };
        self.cursor.expect(")")?;

        Ok(TableSample {
            method,
            size,
            size_type,
        })
    }

    /// LIMIT takes only an integer literal or a parameter.
    fn parse_limit(&mut self) -> Result<Limit, ParseError> {
        let tok = self.cursor.next()?;
        match tok.kind {
            TokenKind::Integer(n) => Ok(Limit::Integer(n)),
            TokenKind::Plain if tok.is_param() => Ok(Limit::Param(String::from(&tok.text[1..]))),
            _ => Err(self
                .cursor
                .fail(ErrorKind::InvalidLimit(String::from(tok.text)), tok.span)),
        }
    }

    /// Fails with "got `tok`, want `wanted`".
    pub(super) fn unexpected(&mut self, tok: &Token<'_>, wanted: &'static str) -> ParseError {
        self.cursor.fail(
            ErrorKind::Unexpected {
                found: String::from(tok.text),
                wanted,
            },
            tok.span,
        )
    }
}
