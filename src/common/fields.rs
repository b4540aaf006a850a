// Helpers for reading fields out of untyped JSON records

use serde_json::{Map, Value};
use tracing::warn;

use super::config::{UnknownFieldPolicy, ValidationConfig};
use super::validation::ValidationResult;

/// What a record holds under a given key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Key absent or explicitly `null`
    Missing,
    NotString,
    Text(&'a str),
}

pub fn string_field<'a>(record: &'a Map<String, Value>, key: &str) -> FieldValue<'a> {
    match record.get(key) {
        None | Some(Value::Null) => FieldValue::Missing,
        Some(Value::String(s)) => FieldValue::Text(s.as_str()),
        Some(_) => FieldValue::NotString,
    }
}

/// Length in characters, not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Returns the record as an object, or records a `value` issue when it is not one.
pub fn expect_object<'a>(
    data: &'a Value,
    result: &mut ValidationResult,
) -> Option<&'a Map<String, Value>> {
    match data.as_object() {
        Some(record) => Some(record),
        None => {
            result.add_error("value", "\"value\" must be of type object");
            None
        }
    }
}

/// Applies the configured unknown-field policy to every key not in `known`.
pub fn check_unknown_fields(
    form: &str,
    record: &Map<String, Value>,
    known: &[&str],
    config: &ValidationConfig,
    result: &mut ValidationResult,
) {
    if config.unknown_fields == UnknownFieldPolicy::Allow {
        return;
    }

    let unknown: Vec<&String> = record
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .collect();

    if unknown.is_empty() {
        return;
    }

    warn!(form, rejected = unknown.len(), "Unknown fields rejected");

    for key in unknown {
        result.add_error(key, &format!("\"{}\" is not allowed", key));
    }
}

// Default messages for forms without custom wording

pub fn required_message(field: &str) -> String {
    format!("\"{}\" is required", field)
}

pub fn not_string_message(field: &str) -> String {
    format!("\"{}\" must be a string", field)
}

pub fn empty_message(field: &str) -> String {
    format!("\"{}\" is not allowed to be empty", field)
}

pub fn min_length_message(field: &str, min: usize) -> String {
    format!("\"{}\" length must be at least {} characters long", field, min)
}

pub fn max_length_message(field: &str, max: usize) -> String {
    format!(
        "\"{}\" length must be less than or equal to {} characters long",
        field, max
    )
}
