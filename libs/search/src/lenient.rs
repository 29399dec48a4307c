//! Tolerant parsing of user-supplied filter values
//!
//! End-user search input is never trusted and never fatal: a value that does
//! not parse drops its constraint instead of rejecting anything. Every
//! filter field goes through these combinators so the ignore-on-failure
//! policy lives in one place rather than scattered fallbacks.

use std::str::FromStr;

/// Parse a value or drop the constraint.
///
/// `None` means "no constraint", not "match nothing".
pub fn parse_lenient<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse a checkbox-style boolean. Unrecognized values drop the flag.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Values below this are treated as millions of currency units.
const MILLIONS_THRESHOLD: f64 = 1000.0;

/// Normalize a raw price bound to whole currency units.
///
/// Query strings and saved searches carry prices in two conventions:
/// "4850000" (currency units) and "4.85" (millions). The legacy heuristic —
/// anything under 1000 is millions — is ambiguous for genuinely tiny prices
/// and is kept only for compatibility; replacing it with an explicit unit
/// field needs to touch this function alone.
pub fn price_to_currency_units(value: f64) -> i64 {
    if value < MILLIONS_THRESHOLD {
        (value * 1_000_000.0) as i64
    } else {
        value as i64
    }
}

/// Normalize an already-numeric bound, e.g. one taken from a persisted
/// filter or built programmatically in millions.
pub fn normalize_price_bound(bound: i64) -> i64 {
    if (bound as f64) < MILLIONS_THRESHOLD {
        bound * 1_000_000
    } else {
        bound
    }
}

/// Lenient price bound: parse, then normalize units.
pub fn price_bound(raw: &str) -> Option<i64> {
    parse_lenient::<f64>(raw).map(price_to_currency_units)
}
