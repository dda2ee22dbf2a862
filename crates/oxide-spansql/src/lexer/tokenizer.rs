//! Tokenizer implementation.

use super::{Span, Token, TokenKind};
use crate::parser::{ErrorKind, ParseError};

/// Operators, longest first so that two-byte forms win over their prefixes.
const OPERATORS: [&str; 7] = ["<=", ">=", "!=", "<>", "<", ">", "="];

/// A lexer over a borrowed input string.
///
/// The lexer is a plain position into the input, so copying it is a cheap way
/// to take a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

/// Whitespace is space, backspace, tab and newline.
const fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\x08' | b'\t' | b'\n')
}

const fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'@'
}

const fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Creates a lexer that resumes at byte offset `pos` of `input`.
    pub(crate) const fn resume(input: &'a str, pos: usize) -> Self {
        Self { input, pos }
    }

    /// The full input.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// The current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed input, starting at the current position.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Skips whitespace and `#`, `--` and `/* */` comments.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnterminatedComment`] if a comment has no
    /// terminator. The position is left at the start of that comment.
    pub fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while self.peek().is_some_and(is_space) {
                self.pos += 1;
            }

            let rest = self.rest();
            let (opener, terminator) = if rest.starts_with('#') {
                ("#", "\n")
            } else if rest.starts_with("--") {
                ("--", "\n")
            } else if rest.starts_with("/*") {
                ("/*", "*/")
            } else {
                return Ok(());
            };

            match rest[opener.len()..].find(terminator) {
                Some(offset) => self.pos += opener.len() + offset + terminator.len(),
                None => {
                    return Err(ParseError::new(
                        ErrorKind::UnterminatedComment,
                        Span::new(self.pos, self.input.len()),
                    ));
                }
            }
        }
    }

    /// Consumes `start..end` as a token.
    fn make_token(&mut self, start: usize, end: usize, kind: TokenKind) -> Token<'a> {
        self.pos = end;
        Token::new(&self.input[start..end], kind, Span::new(start, end))
    }

    /// Scans an identifier, keyword or `@parameter`.
    fn scan_identifier(&mut self) -> Token<'a> {
        let start = self.pos;
        let len = 1 + self.input.as_bytes()[start + 1..]
            .iter()
            .take_while(|&&c| is_identifier_char(c))
            .count();
        self.make_token(start, start + len, TokenKind::Plain)
    }

    /// Scans a numeric literal with an optional sign and `0x` prefix.
    ///
    /// A decimal literal becomes a float on a `.` (only before any exponent)
    /// or an `e`/`E` exponent (at most one).
    fn scan_number(&mut self) -> Result<Token<'a>, ParseError> {
        let start = self.pos;
        let bytes = self.rest().as_bytes();

        let mut i = 0;
        let negative = match bytes[0] {
            b'-' => {
                i += 1;
                true
            }
            b'+' => {
                i += 1;
                false
            }
            _ => false,
        };
        let radix = if bytes[i..].starts_with(b"0x") {
            i += 2;
            16
        } else {
            10
        };

        let digits_start = i;
        let (mut dot, mut exponent) = (false, false);
        while let Some(&c) = bytes.get(i) {
            match c {
                b'0'..=b'9' => i += 1,
                b'a'..=b'f' | b'A'..=b'F' if radix == 16 => i += 1,
                b'e' | b'E' if radix == 10 => {
                    if exponent {
                        return Err(self.bad_number(start, i));
                    }
                    exponent = true;
                    i += 1;
                    if matches!(bytes.get(i), Some(b'+' | b'-')) {
                        i += 1;
                    }
                }
                b'.' if radix == 10 => {
                    if dot || exponent {
                        return Err(self.bad_number(start, i));
                    }
                    dot = true;
                    i += 1;
                }
                _ => break,
            }
        }

        let span = Span::new(start, start + i);
        if i == digits_start {
            return Err(ParseError::new(ErrorKind::NoDigits, span));
        }

        let text = span.slice(self.input);
        let magnitude = &text[digits_start..];
        let invalid = |reason: String| {
            ParseError::new(
                ErrorKind::InvalidNumber {
                    literal: String::from(text),
                    reason,
                },
                span,
            )
        };

        let kind = if dot || exponent {
            let value: f64 = magnitude.parse().map_err(|e| invalid(format!("{e}")))?;
            TokenKind::Float(if negative { -value } else { value })
        } else {
            let value = i64::from_str_radix(magnitude, radix).map_err(|e| invalid(format!("{e}")))?;
            TokenKind::Integer(if negative { -value } else { value })
        };

        Ok(self.make_token(start, span.end, kind))
    }

    fn bad_number(&self, start: usize, len: usize) -> ParseError {
        let span = Span::new(start, start + len);
        ParseError::new(
            ErrorKind::BadNumber(String::from(span.slice(self.input))),
            span,
        )
    }

    /// Scans a double-quoted string literal; `\` escapes the following byte.
    fn scan_string(&mut self) -> Result<Token<'a>, ParseError> {
        let start = self.pos;
        let bytes = self.rest().as_bytes();

        let mut i = 1;
        let mut closed = false;
        while i < bytes.len() {
            let c = bytes[i];
            i += 1;
            if c == b'"' {
                closed = true;
                break;
            }
            if c == b'\\' && i < bytes.len() {
                i += 1;
            }
        }

        if !closed {
            return Err(ParseError::new(
                ErrorKind::UnterminatedString,
                Span::new(start, self.input.len()),
            ));
        }

        let span = Span::new(start, start + i);
        let text = span.slice(self.input);
        let value = unescape(&text[1..text.len() - 1]).map_err(|reason| {
            ParseError::new(
                ErrorKind::InvalidString {
                    literal: String::from(text),
                    reason,
                },
                span,
            )
        })?;

        Ok(self.make_token(start, span.end, TokenKind::String(value)))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Eof`] once the input is exhausted, or a lexical
    /// error. The position does not move past an erroneous lexeme.
    pub fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        self.skip_whitespace_and_comments()?;
        let start = self.pos;
        let bytes = self.input.as_bytes();

        let Some(&c) = bytes.get(start) else {
            return Err(ParseError::eof(start));
        };
        let next_is_digit = bytes.get(start + 1).is_some_and(u8::is_ascii_digit);

        match c {
            b',' | b';' | b'(' | b')' | b'*' => Ok(self.make_token(start, start + 1, TokenKind::Plain)),
            c if is_identifier_start(c) => Ok(self.scan_identifier()),
            b'+' | b'-' | b'.' if next_is_digit => self.scan_number(),
            b'0'..=b'9' => self.scan_number(),
            // Below numbers: a sign not followed by a digit is an operator.
            b'+' | b'-' => Ok(self.make_token(start, start + 1, TokenKind::Plain)),
            b'"' => self.scan_string(),
            _ => {
                let rest = self.rest();
                for width in [2, 1] {
                    if let Some(op) = rest.get(..width) {
                        if OPERATORS.contains(&op) {
                            return Ok(self.make_token(start, start + width, TokenKind::Plain));
                        }
                    }
                }
                Err(ParseError::new(
                    ErrorKind::UnexpectedByte(c),
                    Span::new(start, start + 1),
                ))
            }
        }
    }

    /// Tokenizes the entire input.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Ok(token) => tokens.push(token),
                Err(e) if e.is_eof() => return Ok(tokens),
                Err(e) => return Err(e),
            }
        }
    }
}

/// Decodes the body of a double-quoted string literal.
fn unescape(body: &str) -> Result<String, &'static str> {
    let mut out = Vec::with_capacity(body.len());
    let mut buf = [0; 4];
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == '\n' {
            return Err("newline in string");
        }
        if c != '\\' {
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let escape = chars.next().ok_or("trailing backslash")?;
        match escape {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' | '"' => out.push(escape as u8),
            'x' => {
                let value = take_digits(&mut chars, 16, 2)?;
                out.push(u8::try_from(value).map_err(|_| "invalid hex escape")?);
            }
            '0'..='7' => {
                let rest = take_digits(&mut chars, 8, 2)?;
                let value = (escape as u32 - '0' as u32) * 64 + rest;
                out.push(u8::try_from(value).map_err(|_| "octal escape out of range")?);
            }
            'u' | 'U' => {
                let width = if escape == 'u' { 4 } else { 8 };
                let value = take_digits(&mut chars, 16, width)?;
                let decoded = char::from_u32(value).ok_or("invalid unicode code point")?;
                out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
            }
            _ => return Err("unknown escape sequence"),
        }
    }

    String::from_utf8(out).map_err(|_| "escapes do not form valid UTF-8")
}

fn take_digits(chars: &mut core::str::Chars<'_>, radix: u32, count: usize) -> Result<u32, &'static str> {
    let mut value = 0;
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(radix))
            .ok_or("truncated escape sequence")?;
        value = value * radix + digit;
    }
    Ok(value)
}
