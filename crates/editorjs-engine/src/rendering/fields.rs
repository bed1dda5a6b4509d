//! Best-effort readers for block data.
//!
//! A missing or mis-typed field never fails: it collapses to the caller's
//! default using loose scalar conversions.

use serde_json::Value;

use crate::models::BlockData;

/// Loose string conversion. `None` for arrays and objects.
pub fn coerce_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) | Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Loose integer conversion: floats truncate, strings use their leading
/// integer prefix, booleans map to 1 and 0.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => leading_int(s),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let digits_start = usize::from(s.starts_with(['-', '+']));
    let digits_end = s[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_start);
    if digits_end == digits_start {
        return None;
    }
    s[..digits_end].parse().ok()
}

pub fn string(data: &BlockData, key: &str, default: &str) -> String {
    data.get(key)
        .and_then(coerce_str)
        .unwrap_or_else(|| default.to_string())
}

pub fn int(data: &BlockData, key: &str, default: i64) -> i64 {
    data.get(key).and_then(coerce_int).unwrap_or(default)
}

/// Only a JSON `true` is truthy.
pub fn flag(data: &BlockData, key: &str) -> bool {
    matches!(data.get(key), Some(Value::Bool(true)))
}

/// A sequence of strings. Non-array values yield an empty list and
/// non-scalar elements become empty strings.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_str(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}

/// A sequence of rows, each a sequence of strings.
pub fn string_rows(value: Option<&Value>) -> Vec<Vec<String>> {
    match value {
        Some(Value::Array(rows)) => rows.iter().map(|row| string_list(Some(row))).collect(),
        _ => Vec::new(),
    }
}

/// A string member of a nested object, e.g. `file.url`.
pub fn nested_string(data: &BlockData, object: &str, key: &str) -> Option<String> {
    match data.get(object) {
        Some(Value::Object(members)) => members
            .get(key)
            .filter(|value| !value.is_null())
            .and_then(coerce_str),
        _ => None,
    }
}
