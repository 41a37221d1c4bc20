//! Acquiring input from files and streams.
//!
//! The whole input is read into memory before parsing starts.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;
use crate::limits::Limits;
use crate::value::Value;

/// Reads the file at `path` and parses it.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    parse_file_with(path, Limits::default())
}

pub fn parse_file_with(path: impl AsRef<Path>, limits: Limits) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(crate::parse_with(&bytes, limits)?)
}

/// Like [`parse_file`], but `None` for unreadable, empty or malformed files.
pub fn parse_document_file(path: impl AsRef<Path>) -> Option<Value> {
    parse_file(path).ok()
}

/// Reads `reader` to the end and parses the result.
pub fn parse_reader<R: Read>(mut reader: R, limits: Limits) -> Result<Value, LoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Io {
            path: "<stream>".into(),
            source,
        })?;
    Ok(crate::parse_with(&bytes, limits)?)
}
