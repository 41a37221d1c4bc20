//! json-doc - JSON text parser and in-memory document model.
//!
//! Input bytes are parsed in a single pass by a recursive-descent [`parser`]
//! reading straight off a byte [`scanner`], without a separate token stream.
//! The result is a [`Value`] tree that owns all of its data, can be navigated
//! and grown through auto-vivifying indexing, and is written back out as
//! compact JSON by the [`serializer`].
//!
//! ```
//! use json_doc::{parse, to_string, Value};
//!
//! let mut doc = parse(br#"{"name": "widget", "tags": ["a"]}"#).unwrap();
//! doc["tags"][2] = Value::from("c");
//! doc["size"]["w"] = Value::from(3);
//! assert_eq!(
//!     to_string(&doc),
//!     r#"{"name":"widget","tags":["a",null,"c"],"size":{"w":3}}"#
//! );
//! ```

mod error;
mod interop;
mod limits;
mod load;
mod parser;
pub mod scanner;
mod serializer;
pub mod value;

pub use error::{LoadError, ParseError, ParseErrorKind, Position, TypeError};
pub use limits::{Limits, DEFAULT_MAX_DEPTH};
pub use load::{parse_document_file, parse_file, parse_file_with, parse_reader};
pub use serializer::{to_string, write_value};
pub use value::{FromValue, Kind, Map, Value, ValueIndex};

use parser::Parser;

/// Parses one JSON document from `input` with default [`Limits`].
///
/// Only whitespace may follow the top-level value.
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    parse_with(input, Limits::default())
}

pub fn parse_with(input: &[u8], limits: Limits) -> Result<Value, ParseError> {
    Parser::new(input, limits).parse_document()
}

pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

/// Parses `input`, discarding the failure details: `None` for empty or
/// malformed input.
pub fn parse_document(input: &[u8]) -> Option<Value> {
    parse(input).ok()
}
