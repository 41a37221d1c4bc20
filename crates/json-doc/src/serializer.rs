//! Compact JSON text output.

use std::fmt::Write;

use crate::value::Value;

/// Renders `value` as compact JSON: no whitespace, no trailing newline.
///
/// ```
/// use json_doc::{to_string, Value};
///
/// let mut doc = Value::Null;
/// doc["list"][1] = Value::from("b");
/// assert_eq!(to_string(&doc), r#"{"list":[null,"b"]}"#);
/// ```
pub fn to_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Appends the compact JSON text of `value` to `out`.
pub fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Double(d) => write_double(out, *d),
        Value::String(s) => write_str(out, s),
        Value::Array(arr) => {
            out.push('[');
            for item in arr {
                write_value(out, item);
                out.push(',');
            }
            close(out, !arr.is_empty(), ']');
        }
        Value::Object(map) => {
            out.push('{');
            for (key, item) in map {
                write_str(out, key);
                out.push(':');
                write_value(out, item);
                out.push(',');
            }
            close(out, !map.is_empty(), '}');
        }
    }
}

/// Every entry is followed by a comma; the last one is overwritten by the
/// closing bracket. An empty container has no comma to overwrite.
fn close(out: &mut String, had_entries: bool, bracket: char) {
    if had_entries {
        out.pop();
    }
    out.push(bracket);
}

/// Shortest text that parses back to the same `f64`, always with a `.` or an
/// exponent so it reads back as a double. JSON has no NaN or infinity.
fn write_double(out: &mut String, d: f64) {
    if d.is_finite() {
        let _ = write!(out, "{d:?}");
    } else {
        out.push_str("null");
    }
}

fn write_str(out: &mut String, s: &str) {
    out.push('"');
    let mut run_start = 0;
    for (i, b) in s.bytes().enumerate() {
        let escaped = match b {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x08 => "\\b",
            0x0c => "\\f",
            0x00..=0x1f => "",
            _ => continue,
        };
        out.push_str(&s[run_start..i]);
        if escaped.is_empty() {
            let _ = write!(out, "\\u{b:04x}");
        } else {
            out.push_str(escaped);
        }
        run_start = i + 1;
    }
    out.push_str(&s[run_start..]);
    out.push('"');
}
