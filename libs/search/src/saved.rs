//! Saved-search resolution
//!
//! Saved searches persist filter criteria as opaque JSON text. Two shapes
//! are live in production data and neither carries a version field, so both
//! are tolerated indefinitely:
//!
//! - canonical short names: `priceFrom`, `priceTo`, `rooms`, `district`,
//!   `developer`
//! - legacy long names: `price_min`, `price_max`, `districts` (list),
//!   `developers` (list), `location`
//!
//! Canonical fields win when both are present; list-valued legacy fields
//! contribute their first element. A blob that cannot be parsed resolves to
//! an empty spec — replaying a broken saved search shows everything rather
//! than nothing.

use crate::error::{Error, Result};
use crate::lenient;
use crate::params::FilterSpec;
use serde_json::{Map, Value};

/// Resolve a persisted blob, degrading to a no-op spec on any malformation.
pub fn resolve_saved_filter(raw_json: &str) -> FilterSpec {
    try_resolve_saved_filter(raw_json).unwrap_or_default()
}

/// Strict variant for admin tooling that wants to surface broken blobs.
pub fn try_resolve_saved_filter(raw_json: &str) -> Result<FilterSpec> {
    let value: Value = serde_json::from_str(raw_json)?;
    let Some(object) = value.as_object() else {
        return Err(Error::SavedSearch(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    };
    Ok(resolve_object(object))
}

fn resolve_object(object: &Map<String, Value>) -> FilterSpec {
    FilterSpec {
        rooms: rooms_of(object.get("rooms")),
        price_min: price_of(object.get("priceFrom"))
            .or_else(|| price_of(object.get("price_min"))),
        price_max: price_of(object.get("priceTo"))
            .or_else(|| price_of(object.get("price_max"))),
        district: string_of(object.get("district"))
            .or_else(|| first_of(object.get("districts")))
            .or_else(|| string_of(object.get("location"))),
        developer: string_of(object.get("developer"))
            .or_else(|| first_of(object.get("developers"))),
        residential_complex: string_of(object.get("residential_complex"))
            .or_else(|| string_of(object.get("complex_name"))),
        mortgage: object.get("mortgage").and_then(flag_of),
        ..FilterSpec::default()
    }
}

/// A price bound in either persisted convention: a JSON number or a numeric
/// string, possibly in millions either way.
fn price_of(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_f64().map(lenient::price_to_currency_units),
        Value::String(s) => lenient::price_bound(s),
        _ => None,
    }
}

fn string_of(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn first_of(value: Option<&Value>) -> Option<String> {
    string_of(value?.as_array()?.first())
}

fn rooms_of(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => token_list(s),
        Some(Value::Number(n)) => vec![n.to_string()],
        Some(Value::Array(items)) => items
            .iter()
            .flat_map(|item| match item {
                Value::String(s) => token_list(s),
                Value::Number(n) => vec![n.to_string()],
                _ => Vec::new(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn token_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn flag_of(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => lenient::parse_flag(s),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
