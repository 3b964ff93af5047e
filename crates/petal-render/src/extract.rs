//! Lenient field extraction from externally authored content.
//!
//! A renderer's last line of defense: even after normalization, a
//! field may still arrive as a wrapper object that escaped the
//! canonical shapes (`{value}` / `{text}` / `{label}`), as the wrong
//! type, or not at all. These helpers always produce something
//! displayable.

use serde_json::{Map, Value};

/// Pull a display string out of `content[key]`, unwrapping known
/// wrapper shapes, falling back to `default` for anything blank or
/// unusable.
pub(crate) fn string_field(content: &Value, key: &str, default: &str) -> String {
    content
        .get(key)
        .and_then(scalar_string)
        .unwrap_or_else(|| default.to_string())
}

/// Like [`string_field`] but without a default; blank means absent.
pub(crate) fn optional_string_field(content: &Value, key: &str) -> Option<String> {
    content.get(key).and_then(scalar_string)
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => ["value", "text", "label"]
            .iter()
            .find_map(|key| match map.get(*key) {
                Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                _ => None,
            }),
        _ => None,
    }
}

/// `content[key]` as an object, if it is one.
pub(crate) fn object_field<'v>(content: &'v Value, key: &str) -> Option<&'v Map<String, Value>> {
    content.get(key).and_then(Value::as_object)
}

/// `content[key]` as an array, if it is one.
pub(crate) fn array_field<'v>(content: &'v Value, key: &str) -> Option<&'v Vec<Value>> {
    content.get(key).and_then(Value::as_array)
}
