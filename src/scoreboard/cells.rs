//! Conservative coercion of untyped cells.
//!
//! The feed's typing drifts between endpoints and even between rows of the
//! same table, so none of these fail: the worst case is a blank or zero field.

use serde_json::Value;

/// Cell at `idx`, or `Null` when the column is absent or the row is short
pub fn cell(row: &[Value], idx: Option<usize>) -> &Value {
    idx.and_then(|i| row.get(i)).unwrap_or(&Value::Null)
}

pub fn as_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Nested values never carry a meaningful scalar here
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Integers pass through, floats truncate toward zero, numeric strings parse
pub fn as_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(truncate))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .unwrap_or_else(|_| truncate(as_f64(value))),
        _ => 0,
    }
}

/// Non-negative counts (scores, periods). Negative input clamps to zero.
pub fn as_count(value: &Value) -> u32 {
    as_i64(value).clamp(0, u32::MAX as i64) as u32
}

pub fn as_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

fn truncate(f: f64) -> i64 {
    if f.is_finite() {
        f.trunc() as i64
    } else {
        0
    }
}
