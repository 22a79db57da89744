//! Context descriptor reading.

use crate::error::{ExtractError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads and parses a descriptor. Any I/O or JSON failure is fatal.
pub fn read_descriptor(path: &Path) -> Result<Value> {
    let data = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| ExtractError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the non-empty string under `field`, or `None` when the field is
/// missing or empty.
///
/// Empty means any falsy JSON value (`null`, `""`, `false`, `0`, `[]`, `{}`).
/// Other non-string values are an error, as is a document that is not an
/// object. `path` is only used for error reporting.
pub fn context_value(doc: &Value, field: &str, path: &Path) -> Result<Option<String>> {
    let obj = doc.as_object().ok_or_else(|| ExtractError::NotAnObject {
        path: path.to_path_buf(),
    })?;

    let value = match obj.get(field) {
        None => return Ok(None),
        Some(v) => v,
    };

    if is_empty(value) {
        return Ok(None);
    }
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ExtractError::ContextNotString {
            path: path.to_path_buf(),
            field: field.to_string(),
        }),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
