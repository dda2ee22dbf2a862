//! Expression grammar.
//!
//! Each precedence level parses its operands with the next, tighter one:
//!
//! ```text
//! OR -> AND -> NOT -> IS -> comparison -> arithmetic -> literal
//! ```
//!
//! `OR` and `AND` share [`BinaryLevel`]; the others have irregular syntax and
//! are written out by hand.

use tracing::trace;

use super::error::{ErrorKind, ParseError};
use super::parser::Parser;
use crate::ast::{ComparisonOp, Expr, FunctionCall, IsValue, Literal, LogicalOp};
use crate::lexer::{is_identifier_name, TokenKind};

/// Parses one operand of a binary level.
type Operand<'a> = fn(&mut Parser<'a>) -> Result<Expr, ParseError>;

/// A left-associative binary operator spelled as a single keyword.
struct BinaryLevel<'a> {
    keyword: &'static str,
    operand: Operand<'a>,
    /// Shape requirement for both operands, checked once both are parsed.
    check: Option<fn(&Expr) -> Result<(), ErrorKind>>,
    combine: fn(Expr, Expr) -> Expr,
}

/// Operands of `AND`, `OR` and `WHERE` must be boolean-shaped.
fn require_boolean(expr: &Expr) -> Result<(), ErrorKind> {
    if expr.is_boolean() {
        Ok(())
    } else {
        Err(ErrorKind::NotBoolean {
            found: expr.kind_name(),
        })
    }
}

/// What follows the left operand in a comparison.
enum Comparator {
    Binary(ComparisonOp),
    Between { negated: bool },
}

impl<'a> Parser<'a> {
    /// Parses an expression at the loosest precedence level.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, syntax or shape error.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        trace!(rem = self.remainder(), "parse_expr");
        self.parse_or()
    }

    /// Parses an expression that must be boolean-shaped.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotBoolean`] located at the start of the
    /// expression if it cannot evaluate to a boolean.
    pub fn parse_bool_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.peek_span();
        let expr = self.parse_expr()?;
        if let Err(kind) = require_boolean(&expr) {
            return Err(self.cursor.fail(kind, start));
        }
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(&BinaryLevel {
            keyword: "OR",
            operand: Self::parse_and,
            check: Some(require_boolean),
            combine: |left, right| Expr::logical(left, LogicalOp::Or, right),
        })
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(&BinaryLevel {
            keyword: "AND",
            operand: Self::parse_not,
            check: Some(require_boolean),
            combine: |left, right| Expr::logical(left, LogicalOp::And, right),
        })
    }

    /// `operand (keyword operand)*`, folded to the left.
    fn parse_binary(&mut self, level: &BinaryLevel<'a>) -> Result<Expr, ParseError> {
        let mut expr = (level.operand)(self)?;
        loop {
            let op = match self.cursor.next() {
                Ok(tok) if tok.is(level.keyword) => tok,
                _ => {
                    self.cursor.back();
                    break;
                }
            };
            let rhs = (level.operand)(self)?;
            if let Some(check) = level.check {
                for operand in [&expr, &rhs] {
                    if let Err(kind) = check(operand) {
                        return Err(self.cursor.fail(kind, op.span));
                    }
                }
            }
            expr = (level.combine)(expr, rhs);
        }
        Ok(expr)
    }

    /// `NOT` applies to a whole boolean expression, so `NOT A AND B` is
    /// `NOT (A AND B)`.
    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if !self.cursor.accept("NOT") {
            return self.parse_is();
        }
        Ok(Expr::Not(Box::new(self.parse_bool_expr()?)))
    }

    /// `comparison [IS [NOT] {NULL | TRUE | FALSE}]`
    fn parse_is(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_comparison()?;
        if !self.cursor.accept("IS") {
            return Ok(expr);
        }

        let negated = self.cursor.accept("NOT");
        let tok = self.cursor.next()?;
        let value = match tok.text {
            "NULL" => IsValue::Null,
            "TRUE" => IsValue::True,
            "FALSE" => IsValue::False,
            _ => return Err(self.unexpected(&tok, "NULL or TRUE or FALSE")),
        };

        Ok(Expr::Is {
            expr: Box::new(expr),
            negated,
            value,
        })
    }

    /// Symbolic comparisons, `[NOT] LIKE` and `[NOT] BETWEEN low AND high`,
    /// chained to the left.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_arith()?;
        loop {
            let Ok(tok) = self.cursor.next() else {
                self.cursor.back();
                break;
            };

            let comparator = if tok.is("NOT") {
                let tok = self.cursor.next()?;
                match tok.text {
                    "LIKE" => Comparator::Binary(ComparisonOp::NotLike),
                    "BETWEEN" => Comparator::Between { negated: true },
                    _ => return Err(self.unexpected(&tok, "LIKE or BETWEEN")),
                }
            } else if tok.is("LIKE") {
                Comparator::Binary(ComparisonOp::Like)
            } else if tok.is("BETWEEN") {
                Comparator::Between { negated: false }
            } else if let Some(op) = ComparisonOp::from_symbol(tok.text) {
                Comparator::Binary(op)
            } else {
                self.cursor.back();
                break;
            };

            let rhs = self.parse_arith()?;
            expr = match comparator {
                Comparator::Binary(op) => Expr::comparison(expr, op, rhs),
                Comparator::Between { negated } => {
                    self.cursor.expect("AND")?;
                    let high = self.parse_arith()?;
                    Expr::Between {
                        expr: Box::new(expr),
                        negated,
                        low: Box::new(rhs),
                        high: Box::new(high),
                    }
                }
            };
        }
        Ok(expr)
    }

    /// A parenthesized expression, a function call or a literal.
    fn parse_arith(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.accept("(") {
            let expr = self.parse_expr()?;
            self.cursor.expect(")")?;
            return Ok(Expr::Paren(Box::new(expr)));
        }

        match self.parse_lit()? {
            Expr::Ident(name) if is_identifier_name(&name) && self.cursor.sniff(&["("]) => {
                let args = self.parse_paren_list(Self::parse_expr)?;
                Ok(Expr::Function(FunctionCall { name, args }))
            }
            lit => Ok(lit),
        }
    }

    /// Literals, `*` and `@params`; any other token is taken as an identifier.
    fn parse_lit(&mut self) -> Result<Expr, ParseError> {
        let tok = self.cursor.next()?;
        let expr = match &tok.kind {
            TokenKind::Integer(n) => Expr::Literal(Literal::Integer(*n)),
            TokenKind::Float(f) => Expr::Literal(Literal::Float(*f)),
            TokenKind::String(s) => Expr::Literal(Literal::String(s.clone())),
            TokenKind::Plain => match tok.text {
                "TRUE" => Expr::Literal(Literal::Bool(true)),
                "FALSE" => Expr::Literal(Literal::Bool(false)),
                "NULL" => Expr::Literal(Literal::Null),
                "*" => Expr::Star,
                text if tok.is_param() => Expr::Param(String::from(&text[1..])),
                text => Expr::Ident(String::from(text)),
            },
        };
        Ok(expr)
    }
}
