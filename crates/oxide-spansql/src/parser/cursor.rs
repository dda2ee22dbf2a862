//! Token cursor with single-token pushback and non-consuming lookahead.

use super::error::{ErrorKind, ParseError};
use crate::lexer::{Lexer, Span, Token};

/// A token, or the condition that ended the token stream.
pub type Lexeme<'a> = Result<Token<'a>, ParseError>;

/// A cursor over the token stream of one input.
///
/// Cloning a cursor snapshots its full state; [`Cursor::sniff`] relies on
/// this to look ahead without committing.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    lexer: Lexer<'a>,
    /// The last lexeme handed out by `next`. Once `done`, the terminal
    /// condition every further read returns.
    current: Lexeme<'a>,
    /// A lexeme pushed back by `back`, replayed by the next `next`.
    pending: Option<Lexeme<'a>>,
    /// Set on end of input and on the first error.
    done: bool,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: Err(ParseError::eof(0)),
            pending: None,
            done: false,
        }
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Eof`] once the input is exhausted, or the lexical
    /// or syntax error that ended the parse. Both repeat on every later call.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Lexeme<'a> {
        if let Some(lexeme) = self.pending.take() {
            self.current = lexeme.clone();
            return lexeme;
        }
        if !self.done {
            self.current = self.lexer.next_token();
            self.done = self.current.is_err();
        }
        self.current.clone()
    }

    /// Pushes the last lexeme back so the next call to [`Cursor::next`]
    /// returns it again.
    ///
    /// # Panics
    ///
    /// Panics if called twice without an intervening `next`; that is a bug in
    /// the grammar, not in the input.
    pub fn back(&mut self) {
        assert!(self.pending.is_none(), "cursor backed up twice");
        self.pending = Some(self.current.clone());
    }

    /// Reports whether the next tokens are exactly `want`, without consuming
    /// anything.
    pub fn sniff(&mut self, want: &[&str]) -> bool {
        let snapshot = self.clone();
        let matched = want
            .iter()
            .all(|w| matches!(self.next(), Ok(tok) if tok.is(w)));
        *self = snapshot;
        matched
    }

    /// The location of the next lexeme, without consuming it.
    pub fn peek_span(&mut self) -> Span {
        let span = match self.next() {
            Ok(tok) => tok.span,
            Err(e) => e.span,
        };
        self.back();
        span
    }

    /// Consumes the next token if it is `want`.
    pub fn accept(&mut self, want: &str) -> bool {
        match self.next() {
            Ok(tok) if tok.is(want) => true,
            _ => {
                self.back();
                false
            }
        }
    }

    /// Consumes the next token, requiring it to be `want`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Mismatch`] naming both tokens, or the condition
    /// that ended the token stream.
    pub fn expect(&mut self, want: &str) -> Result<Token<'a>, ParseError> {
        let tok = self.next()?;
        if tok.is(want) {
            return Ok(tok);
        }
        Err(self.fail(
            ErrorKind::Mismatch {
                found: String::from(tok.text),
                wanted: String::from(want),
            },
            tok.span,
        ))
    }

    /// Ends the parse with an error: every later read returns it.
    pub fn fail(&mut self, kind: ErrorKind, span: Span) -> ParseError {
        let err = ParseError::new(kind, span);
        self.current = Err(err.clone());
        self.pending = None;
        self.done = true;
        err
    }

    /// Reports whether only whitespace and comments remain.
    ///
    /// # Errors
    ///
    /// Returns the lexical error that prevents reading the next token.
    pub fn at_end(&mut self) -> Result<bool, ParseError> {
        match self.next() {
            Ok(_) => {
                self.back();
                Ok(false)
            }
            Err(e) if e.is_eof() => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// The unconsumed input, including a pushed-back token, with leading
    /// whitespace and comments skipped.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        let offset = match &self.pending {
            Some(Ok(tok)) => tok.span.start,
            Some(Err(e)) => e.span.start,
            None => self.lexer.position(),
        };
        let mut rest = Lexer::resume(self.lexer.input(), offset);
        // An unterminated comment stays part of the remainder.
        if rest.skip_whitespace_and_comments().is_err() {
            return Lexer::resume(self.lexer.input(), offset).rest().trim_start();
        }
        rest.rest()
    }

    /// Requires that the whole input has been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TrailingContents`] if anything but whitespace and
    /// comments remains, including input that does not lex.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        let start = match self.next() {
            Err(e) if e.is_eof() => return Ok(()),
            // The lexer stops at the start of the bad lexeme.
            Err(e) => e.span.start,
            Ok(tok) => {
                self.back();
                tok.span.start
            }
        };
        let rest = self.remainder();
        Err(self.fail(
            ErrorKind::TrailingContents(String::from(rest)),
            Span::new(start, self.lexer.input().len()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lexeme: Lexeme<'_>) -> String {
        String::from(lexeme.unwrap().text)
    }

    #[test]
    fn test_next_and_back() {
        let mut cursor = Cursor::new("DROP TABLE Foo");
        assert_eq!(text(cursor.next()), "DROP");
        cursor.back();
        assert_eq!(text(cursor.next()), "DROP");
        assert_eq!(text(cursor.next()), "TABLE");
        assert_eq!(text(cursor.next()), "Foo");
        assert!(cursor.next().unwrap_err().is_eof());
        assert!(cursor.next().unwrap_err().is_eof());
    }

    #[test]
    #[should_panic(expected = "backed up twice")]
    fn test_double_back_panics() {
        let mut cursor = Cursor::new("A B");
        let _ = cursor.next();
        cursor.back();
        cursor.back();
    }

    #[test]
    fn test_back_at_eof_replays_eof() {
        let mut cursor = Cursor::new("A");
        let _ = cursor.next();
        assert!(cursor.next().unwrap_err().is_eof());
        cursor.back();
        assert!(cursor.next().unwrap_err().is_eof());
    }

    #[test]
    fn test_sniff_does_not_consume() {
        let mut cursor = Cursor::new("CREATE TABLE T");
        assert!(cursor.sniff(&["CREATE", "TABLE"]));
        assert!(cursor.sniff(&["CREATE"]));
        assert!(!cursor.sniff(&["CREATE", "INDEX"]));
        assert!(!cursor.sniff(&["CREATE", "TABLE", "T", "X"]));
        assert_eq!(text(cursor.next()), "CREATE");
    }

    #[test]
    fn test_sniff_sees_pushed_back_token() {
        let mut cursor = Cursor::new("ORDER BY A");
        let _ = cursor.next();
        cursor.back();
        assert!(cursor.sniff(&["ORDER", "BY"]));
        assert_eq!(text(cursor.next()), "ORDER");
    }

    #[test]
    fn test_expect_mismatch_is_terminal() {
        let mut cursor = Cursor::new("DROP INDEX Foo");
        assert!(cursor.expect("DROP").is_ok());
        let err = cursor.expect("TABLE").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::Mismatch {
                found: String::from("INDEX"),
                wanted: String::from("TABLE"),
            }
        );
        assert_eq!(cursor.next().unwrap_err(), err);
    }

    #[test]
    fn test_lexical_error_survives_back() {
        let mut cursor = Cursor::new("A $ B");
        let _ = cursor.next();
        let err = cursor.next().unwrap_err();
        cursor.back();
        assert_eq!(cursor.next().unwrap_err(), err);
        assert_eq!(cursor.next().unwrap_err(), err);
    }

    #[test]
    fn test_accept() {
        let mut cursor = Cursor::new("UNIQUE INDEX");
        assert!(!cursor.accept("NULL_FILTERED"));
        assert!(cursor.accept("UNIQUE"));
        assert!(cursor.accept("INDEX"));
        assert!(cursor.at_end().unwrap());
    }

    #[test]
    fn test_remainder_accounts_for_pushback() {
        let mut cursor = Cursor::new("A  B /* c */ C");
        let _ = cursor.next();
        assert_eq!(cursor.remainder(), "B /* c */ C");
        let _ = cursor.next();
        cursor.back();
        assert_eq!(cursor.remainder(), "B /* c */ C");
        let _ = cursor.next();
        assert_eq!(cursor.remainder(), "C");
    }

    #[test]
    fn test_finish() {
        let mut cursor = Cursor::new("A -- trailing comment\n");
        let _ = cursor.next();
        assert!(cursor.finish().is_ok());

        let mut cursor = Cursor::new("A extra stuff");
        let _ = cursor.next();
        let err = cursor.finish().unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::TrailingContents(String::from("extra stuff"))
        );
        assert_eq!(err.span, Span::new(2, 13));
    }

    #[test]
    fn test_finish_wraps_lexical_leftovers() {
        let mut cursor = Cursor::new("A  $ B");
        let _ = cursor.next();
        let err = cursor.finish().unwrap_err();
        assert_eq!(err.kind, ErrorKind::TrailingContents(String::from("$ B")));
        assert_eq!(err.span, Span::new(3, 6));
        assert_eq!(cursor.next().unwrap_err(), err);

        let mut cursor = Cursor::new("A /* open");
        let _ = cursor.next();
        assert_eq!(
            cursor.finish().unwrap_err().kind,
            ErrorKind::TrailingContents(String::from("/* open"))
        );
    }
}
