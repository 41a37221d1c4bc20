//! Error types for parsing, loading and typed value access.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::Kind;

/// A location inside the parsed input.
///
/// `line` and `column` are 1-based; `column` counts bytes, not characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Computes the line/column of byte `offset` in `input`.
    ///
    /// Offsets past the end are clamped to `input.len()`.
    pub fn locate(input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input[..offset];
        let line = 1 + consumed.iter().filter(|&&b| b == b'\n').count();
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        Self {
            offset,
            line,
            column: offset - line_start + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("empty input")]
    EmptyInput,
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("expected {expected}, found `{}`", escape_byte(.found))]
    UnexpectedByte { expected: &'static str, found: u8 },
    #[error("invalid literal, expected `true`, `false` or `null`")]
    InvalidLiteral,
    #[error("invalid number")]
    InvalidNumber,
    #[error("number out of range")]
    NumberOutOfRange,
    #[error("unescaped control character `{}` in string", escape_byte(.0))]
    ControlCharacter(u8),
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,
    #[error("trailing characters after document")]
    TrailingCharacters,
    #[error("nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
    #[error("input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

fn escape_byte(b: &u8) -> String {
    b.escape_ascii().to_string()
}

/// A failed parse: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {}, column {}", .position.line, .position.column)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: Position,
    context: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &[u8], offset: usize) -> Self {
        let position = Position::locate(input, offset);
        let line_start = position.offset + 1 - position.column;
        let context = String::from_utf8_lossy(&input[line_start..position.offset]).into_owned();
        Self {
            kind,
            position,
            context,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Text of the failing line, up to the failure point.
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Reading a document from a file or stream failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A typed read asked for a variant the value does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct TypeError {
    pub expected: &'static str,
    pub found: Kind,
}
