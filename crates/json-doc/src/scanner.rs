//! Byte cursor over the parser input.
//!
//! There is no token stream: the parser pulls single significant bytes with
//! [`Scanner::skip_to_non_space`] and asks for raw [`Span`]s of string and
//! number literals, which are plain index pairs into the input buffer.

use crate::error::{ParseError, ParseErrorKind};

/// A half-open `[start, end)` byte range of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Cursor state of one parse. Every parse owns its own scanner.
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consumes one byte. `None` once the input is exhausted.
    pub fn get(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consumes whitespace (space, tab, CR, LF) and then the first other byte,
    /// returning it. `None` if the input ends first.
    pub fn skip_to_non_space(&mut self) -> Option<u8> {
        while let Some(b) = self.get() {
            if !matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                return Some(b);
            }
        }
        None
    }

    /// Finds the content span of a string whose opening quote was just
    /// consumed, and moves the cursor past the closing quote.
    ///
    /// Escapes are not decoded, only tracked so that `\"` does not terminate
    /// the string while `\\"` does. Unescaped bytes below 0x20 are rejected.
    pub fn scan_string_span(&mut self) -> Result<Span, ParseError> {
        let input = self.input;
        let start = self.pos;
        let mut escaped = false;
        for (i, &b) in input.iter().enumerate().skip(start) {
            match b {
                0x00..=0x1f => {
                    self.pos = i;
                    return Err(self.error(ParseErrorKind::ControlCharacter(b), i));
                }
                b'\\' => escaped = !escaped,
                b'"' if !escaped => {
                    self.pos = i + 1;
                    return Ok(Span { start, end: i });
                }
                _ => escaped = false,
            }
        }
        self.pos = input.len();
        Err(self.error(ParseErrorKind::UnexpectedEof, self.pos))
    }

    /// Returns the span of a number literal whose first byte (digit or `-`)
    /// was just consumed. The span covers that byte and every following byte
    /// in `0-9 . e E + -`; grammar is checked by the caller.
    pub fn scan_number_span(&mut self) -> Span {
        let start = self.pos.saturating_sub(1);
        let len = self.input[self.pos..]
            .iter()
            .take_while(|&&b| matches!(b, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-'))
            .count();
        self.pos += len;
        Span {
            start,
            end: self.pos,
        }
    }

    pub fn slice(&self, span: Span) -> &'a [u8] {
        &self.input[span.start..span.end]
    }

    pub fn error(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, self.input, offset)
    }

    /// An error located at the last consumed byte.
    pub fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        self.error(kind, self.pos.saturating_sub(1))
    }
}
