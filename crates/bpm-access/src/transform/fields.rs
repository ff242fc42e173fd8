//! Field-level normalisers for remote list values
//!
//! Remote list fields arrive as native arrays, JSON-encoded strings,
//! numbered lists ("1. foo\n2. bar"), comma-separated strings or plain text.
//! Both parsers always return a list and never fail.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static NUMBERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s").expect("numbered list pattern is valid"));

static NUMBER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s*").expect("number marker pattern is valid"));

/// Normalise a remote list field into strings
///
/// - null → `[]`
/// - native array → passed through (non-string elements rendered as text)
/// - numbered-list string → one entry per line, markers stripped
/// - comma-separated string → split, trimmed, empties dropped
/// - other non-empty string → single entry
/// - anything else → `[]`
#[must_use]
pub fn parse_array_field(field: &Value) -> Vec<String> {
    match field {
        Value::Array(items) => items.iter().map(value_to_text).collect(),
        Value::String(text) => split_text_list(text),
        _ => Vec::new(),
    }
}

/// Normalise a remote field that may hold JSON-encoded list data
///
/// Strings are parsed as JSON first; a non-array result is wrapped in a
/// one-element list. Unparseable strings go through the numbered-list and
/// comma heuristics, then finally surrounding quotes are stripped.
#[must_use]
pub fn parse_json_field(field: &Value) -> Vec<Value> {
    match field {
        Value::Null => Vec::new(),
        Value::Array(items) => items.clone(),
        Value::String(text) => parse_json_text(text),
        other => vec![other.clone()],
    }
}

fn parse_json_text(text: &str) -> Vec<Value> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items,
        Ok(single) => vec![single],
        Err(_) if is_numbered_list(text) || text.contains(',') => split_text_list(text)
            .into_iter()
            .map(Value::String)
            .collect(),
        Err(_) => {
            let stripped = text.trim().trim_matches(|c| c == '"' || c == '\'').trim();
            if stripped.is_empty() {
                Vec::new()
            } else {
                vec![Value::String(stripped.to_string())]
            }
        }
    }
}

/// Whether `text` holds at least one "N. " line marker
#[must_use]
pub fn is_numbered_list(text: &str) -> bool {
    NUMBERED_LIST.is_match(text)
}

fn split_text_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    if is_numbered_list(text) {
        return text
            .lines()
            .map(|line| NUMBER_MARKER.replace(line, "").trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
    }

    if text.contains(',') {
        return text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect();
    }

    vec![text.trim().to_string()]
}

/// Render a JSON value as display text
#[must_use]
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
