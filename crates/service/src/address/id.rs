//! Identifier rules.
//!
//! Path segments arrive as strings while stored ids are usually JSON
//! integers. A stored number matches when the segment parses to the same
//! number; a stored string matches when it equals the segment or when both
//! parse to the same number.

use serde_json::Value;

use super::{Address, ID_FIELD};

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Whether a stored id value matches a raw path segment.
pub fn matches(stored: &Value, raw: &str) -> bool {
    match stored {
        Value::Number(n) => match (n.as_f64(), parse_number(raw)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        Value::String(s) => {
            s == raw
                || matches!((parse_number(s), parse_number(raw)), (Some(a), Some(b)) if a == b)
        }
        _ => false,
    }
}

/// Whether the record's `id` matches a raw path segment.
pub fn record_matches(address: &Address, raw: &str) -> bool {
    address.get(ID_FIELD).is_some_and(|stored| matches(stored, raw))
}

/// Position of the first record matching `raw`.
pub fn position(addresses: &[Address], raw: &str) -> Option<usize> {
    addresses.iter().position(|a| record_matches(a, raw))
}

/// Next id to assign: one past the largest integer id, or 1 when there is none.
pub fn next_id(addresses: &[Address]) -> i64 {
    addresses
        .iter()
        .filter_map(|a| a.get(ID_FIELD).and_then(parse_integer))
        .max()
        .map_or(1, |max| max.saturating_add(1))
}
