//! Recursive-descent JSON parser.
//!
//! One method per grammar production; each consumes the [`Scanner`] and
//! either returns the value it built or fails the whole parse. There is no
//! recovery and no partial result.

use crate::error::{ParseError, ParseErrorKind};
use crate::limits::Limits;
use crate::scanner::{Scanner, Span};
use crate::value::{Map, Value};

pub(crate) struct Parser<'a> {
    scanner: Scanner<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a [u8], limits: Limits) -> Self {
        Self {
            scanner: Scanner::new(input),
            limits,
            depth: 0,
        }
    }

    /// document = ws value ws
    pub(crate) fn parse_document(mut self) -> Result<Value, ParseError> {
        let input = self.scanner.input();
        if input.is_empty() {
            return Err(self.scanner.error(ParseErrorKind::EmptyInput, 0));
        }
        if input.len() > self.limits.max_input_size {
            return Err(self.scanner.error(
                ParseErrorKind::InputTooLarge {
                    size: input.len(),
                    limit: self.limits.max_input_size,
                },
                0,
            ));
        }
        let first = self.next_significant()?;
        let value = self.parse_value(first)?;
        if self.scanner.skip_to_non_space().is_some() {
            return Err(self
                .scanner
                .error_here(ParseErrorKind::TrailingCharacters));
        }
        Ok(value)
    }

    fn next_significant(&mut self) -> Result<u8, ParseError> {
        self.scanner.skip_to_non_space().ok_or_else(|| {
            self.scanner
                .error(ParseErrorKind::UnexpectedEof, self.scanner.position())
        })
    }

    fn unexpected(&self, expected: &'static str, found: u8) -> ParseError {
        self.scanner
            .error_here(ParseErrorKind::UnexpectedByte { expected, found })
    }

    /// Dispatches on the first significant byte of a value.
    fn parse_value(&mut self, first: u8) -> Result<Value, ParseError> {
        match first {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'"' => self.parse_string().map(Value::String),
            b't' | b'f' | b'n' => self.parse_word(first),
            b'-' | b'0'..=b'9' => self.parse_number(),
            other => Err(self.unexpected("a value", other)),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(self
                .scanner
                .error_here(ParseErrorKind::DepthLimitExceeded(self.limits.max_depth)));
        }
        Ok(())
    }

    /// object = `{` ws `}` | `{` key-value (`,` key-value)* `}`
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut map = Map::new();
        let mut c = self.next_significant()?;
        if c != b'}' {
            loop {
                self.parse_key_value(c, &mut map)?;
                match self.next_significant()? {
                    b',' => c = self.next_significant()?,
                    b'}' => break,
                    other => return Err(self.unexpected("`,` or `}`", other)),
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// key-value = string ws `:` ws value
    ///
    /// A repeated key overwrites the earlier entry.
    fn parse_key_value(&mut self, first: u8, map: &mut Map) -> Result<(), ParseError> {
        if first != b'"' {
            return Err(self.unexpected("a string key", first));
        }
        let key = self.parse_string()?;
        match self.next_significant()? {
            b':' => {}
            other => return Err(self.unexpected("`:`", other)),
        }
        let first = self.next_significant()?;
        let value = self.parse_value(first)?;
        map.insert(key, value);
        Ok(())
    }

    /// array = `[` ws `]` | `[` value (`,` value)* `]`
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut arr = Vec::new();
        let mut c = self.next_significant()?;
        if c != b']' {
            loop {
                arr.push(self.parse_value(c)?);
                match self.next_significant()? {
                    b',' => c = self.next_significant()?,
                    b']' => break,
                    other => return Err(self.unexpected("`,` or `]`", other)),
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    /// Parses a string whose opening quote was consumed and copies its
    /// decoded content out of the input.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let span = self.scanner.scan_string_span()?;
        decode_string(self.scanner.slice(span)).map_err(|(kind, at)| {
            self.scanner.error(kind, span.start + at)
        })
    }

    /// `true`, `false` or `null`, matched by reading exactly as many bytes as
    /// the keyword announced by its first byte has.
    fn parse_word(&mut self, first: u8) -> Result<Value, ParseError> {
        let (word, value): (&[u8], Value) = match first {
            b't' => (&b"true"[..], Value::Bool(true)),
            b'f' => (&b"false"[..], Value::Bool(false)),
            _ => (&b"null"[..], Value::Null),
        };
        let start = self.scanner.position() - 1;
        for _ in 1..word.len() {
            if self.scanner.get().is_none() {
                return Err(self
                    .scanner
                    .error(ParseErrorKind::UnexpectedEof, self.scanner.position()));
            }
        }
        let end = self.scanner.position();
        if self.scanner.slice(Span { start, end }) != word {
            return Err(self.scanner.error(ParseErrorKind::InvalidLiteral, start));
        }
        Ok(value)
    }

    /// Parses a number whose first byte was consumed. The whole scanned span
    /// has to be one valid literal: `1.2.3` is rejected, not read as `1.2`.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let span = self.scanner.scan_number_span();
        let text = self.scanner.slice(span);
        let fail = |kind| self.scanner.error(kind, span.start);
        let Some(shape) = number_shape(text) else {
            return Err(fail(ParseErrorKind::InvalidNumber));
        };
        // Only ASCII bytes can be in the span.
        let text = std::str::from_utf8(text).map_err(|_| fail(ParseErrorKind::InvalidNumber))?;
        if shape == NumberShape::Integer && text != "-0" {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Int(n));
            }
        }
        let d = text
            .parse::<f64>()
            .map_err(|_| fail(ParseErrorKind::InvalidNumber))?;
        if d.is_infinite() {
            return Err(fail(ParseErrorKind::NumberOutOfRange));
        }
        Ok(Value::Double(d))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberShape {
    Integer,
    Real,
}

/// Checks `text` against the JSON number grammar
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` in full.
fn number_shape(text: &[u8]) -> Option<NumberShape> {
    fn digits(text: &[u8], mut i: usize) -> usize {
        while i < text.len() && text[i].is_ascii_digit() {
            i += 1;
        }
        i
    }

    let mut i = 0;
    if text.first() == Some(&b'-') {
        i += 1;
    }
    match text.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits(text, i + 1),
        _ => return None,
    }
    let mut shape = NumberShape::Integer;
    if text.get(i) == Some(&b'.') {
        let end = digits(text, i + 1);
        if end == i + 1 {
            return None;
        }
        i = end;
        shape = NumberShape::Real;
    }
    if matches!(text.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(text.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let end = digits(text, i);
        if end == i {
            return None;
        }
        i = end;
        shape = NumberShape::Real;
    }
    (i == text.len()).then_some(shape)
}

/// Decodes the raw content of a string literal. On failure returns the error
/// kind and the offset inside `raw` where it was found.
fn decode_string(raw: &[u8]) -> Result<String, (ParseErrorKind, usize)> {
    if !raw.contains(&b'\\') {
        return String::from_utf8(raw.to_vec())
            .map_err(|e| (ParseErrorKind::InvalidUtf8, e.utf8_error().valid_up_to()));
    }
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let b = raw[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }
        let escape_at = i;
        let Some(&esc) = raw.get(i + 1) else {
            return Err((ParseErrorKind::InvalidEscape, escape_at));
        };
        i += 2;
        let decoded = match esc {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                let (ch, consumed) = decode_unicode_escape(&raw[i..])
                    .ok_or((ParseErrorKind::InvalidUnicodeEscape, escape_at))?;
                i += consumed;
                ch
            }
            _ => return Err((ParseErrorKind::InvalidEscape, escape_at)),
        };
        let mut buf = [0u8; 4];
        out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
    }
    String::from_utf8(out).map_err(|_| (ParseErrorKind::InvalidUtf8, 0))
}

/// Decodes the `XXXX` after `\u`, pairing a high surrogate with a following
/// `\uXXXX` low surrogate. Returns the character and the bytes consumed.
fn decode_unicode_escape(rest: &[u8]) -> Option<(char, usize)> {
    let hi = hex4(rest)?;
    if !(0xD800..=0xDFFF).contains(&hi) {
        return Some((char::from_u32(hi)?, 4));
    }
    if hi >= 0xDC00 || rest.get(4..6) != Some(b"\\u".as_slice()) {
        return None;
    }
    let lo = hex4(&rest[6..])?;
    if !(0xDC00..=0xDFFF).contains(&lo) {
        return None;
    }
    let combined = 0x10000 + ((hi - 0xD800) << 10) + (lo - 0xDC00);
    Some((char::from_u32(combined)?, 10))
}

fn hex4(bytes: &[u8]) -> Option<u32> {
    let digits = bytes.get(..4)?;
    digits.iter().try_fold(0u32, |acc, &b| {
        let d = (b as char).to_digit(16)?;
        Some((acc << 4) | d)
    })
}
