// keys/mod.rs
// Stringifies JSON values into grouping keys and inverts whole JSON objects.

use crate::errors::{InvertError, Result};
use crate::invert::{invert, invert_by, Inverted};
use indexmap::IndexMap;
use serde_json::{Number, Value};
use tracing::debug;

/// Converts the value stored under `key` into the string used to group it.
///
/// Strings are used as they are, numbers and booleans by their canonical text
/// and `null` as `"null"`. Arrays and objects have no stable key form and are
/// rejected.
pub fn to_property_key(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_key(n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Array(_) | Value::Object(_) => Err(InvertError::UnsupportedValue {
            key: key.to_string(),
            kind: kind_of(value),
        }),
    }
}

// Integral floats print without a fraction so that 1 and 1.0 share a group.
// Magnitudes below 1e-6 or from 1e21 up switch to exponent form (`1e+21`,
// `1.5e-7`), the same split ECMAScript number-to-string uses.
fn number_key(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() => float_key(f),
        _ => n.to_string(),
    }
}

fn float_key(f: f64) -> String {
    // `{:e}` gives the shortest round-trip digits, e.g. "1.5e-7" or "1e21".
    let scientific = format!("{:e}", f);
    let exponent = scientific
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or_default();

    if (-6..21).contains(&exponent) {
        f.to_string()
    } else if exponent >= 0 {
        scientific.replacen('e', "e+", 1)
    } else {
        scientific
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn property_entries(document: &Value) -> Result<Vec<(String, String)>> {
    let object = document.as_object().ok_or(InvertError::NotAnObject {
        found: kind_of(document),
    })?;

    object
        .iter()
        .map(|(key, value)| Ok((key.clone(), to_property_key(key, value)?)))
        .collect()
}

/// Inverts a JSON object, grouping its keys under their stringified values.
pub fn invert_json(document: &Value) -> Result<Inverted<String, String>> {
    let entries = property_entries(document)?;
    let total = entries.len();
    let inverted = invert_by(entries);
    debug!(entries = total, groups = inverted.len(), "inverted JSON object");
    Ok(inverted)
}

/// Like [`invert_json`], but keeps only the last key for each value.
pub fn invert_json_last_wins(document: &Value) -> Result<IndexMap<String, String>> {
    let entries = property_entries(document)?;
    let total = entries.len();
    let inverted = invert(entries);
    if inverted.len() < total {
        debug!(
            overwritten = total - inverted.len(),
            "duplicate values replaced earlier keys"
        );
    }
    Ok(inverted)
}
