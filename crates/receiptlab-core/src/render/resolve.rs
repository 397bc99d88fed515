//! Path resolution against the data source
//!
//! Paths are dot-delimited; `name[idx]` and `name[]` are shorthands for
//! `name.idx` and `name.` (an empty segment). When a segment lands on a
//! sequence, a numeric segment selects an absolute index and anything else
//! selects the element under the list cursor for the prefix walked so far.
//! Reserved words stop the walk at that boundary.

use serde_json::Value;
use std::borrow::Cow;

use super::cursor::CursorStore;
use crate::config::consts::{reserved, SEQUENCE_SEPARATOR};

/// Normalize bracket indexes to dotted segments and strip a leading dot
pub fn normalize(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(open) = rest.find('[') {
        normalized.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let word_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());

        if after[word_len..].starts_with(']') {
            normalized.push('.');
            normalized.push_str(&after[..word_len]);
            rest = &after[word_len + 1..];
        } else {
            normalized.push('[');
            rest = after;
        }
    }
    normalized.push_str(rest);

    match normalized.strip_prefix('.') {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

/// Resolve `path` against `source`, consulting list cursors for relative
/// segments. Returns `None` when any segment is absent.
pub fn resolve<'a>(source: &'a Value, path: &str, cursors: &CursorStore) -> Option<Cow<'a, Value>> {
    let normalized = normalize(path);
    let mut prefix = String::new();
    let mut current = source;

    for key in normalized.split('.') {
        match current {
            Value::Array(items) => {
                let position = match key.parse::<usize>() {
                    Ok(index) => index,
                    Err(_) => cursors.position(&prefix),
                };
                prefix.push('.');
                prefix.push_str(key);

                if let Some(value) = reserved_word(key, position, items.len()) {
                    return Some(Cow::Owned(value));
                }
                current = items.get(position)?;
            }
            Value::Object(map) => {
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                current = map.get(key)?;
            }
            _ => return None,
        }
    }

    Some(Cow::Borrowed(current))
}

fn reserved_word(key: &str, position: usize, len: usize) -> Option<Value> {
    let value = match key {
        reserved::INDEX => Value::String(position.to_string()),
        reserved::NUMBER => Value::String((position + 1).to_string()),
        reserved::COUNT => Value::String(len.to_string()),
        reserved::FIRST => Value::Bool(position == 0),
        reserved::LAST => Value::Bool(position + 1 == len),
        reserved::NOT_FIRST => Value::Bool(position > 0),
        reserved::NOT_LAST => Value::Bool(position + 1 < len),
        _ => return None,
    };
    Some(value)
}

/// Truthiness used by `required`
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Whether `path` resolves to a truthy value (non-empty when a sequence)
pub fn is_available(source: &Value, path: &str, cursors: &CursorStore) -> bool {
    resolve(source, path, cursors).is_some_and(|value| is_truthy(&value))
}

/// Resolve `path` as text, falling back to the path itself
pub fn resolve_text(source: &Value, path: &str, cursors: &CursorStore) -> String {
    match resolve(source, path, cursors) {
        Some(value) => value_to_text(&value),
        None => path.to_string(),
    }
}

/// Printable form of a data-source value
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(SEQUENCE_SEPARATOR),
        Value::Object(_) => value.to_string(),
    }
}
