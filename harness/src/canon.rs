//! Canonical JSON bytes for run reports.
//!
//! Reports are hashed, so the byte form must not depend on platform float
//! formatting or map iteration order:
//!
//! - keys are sorted (`serde_json::Map` is a `BTreeMap` without the
//!   `preserve_order` feature, which this workspace never enables);
//! - output is compact;
//! - every number is an integer. Costs go through [`cost_value`], which
//!   renders them as fixed-precision strings.

use serde_json::Value;

/// Digits after the decimal point in a rendered cost.
pub const COST_PRECISION: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer. `path` points at it (`/world/land/0`).
    NonIntegerNumber { path: String, raw: String },
    /// `serde_json` refused the value.
    Serialize { message: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { path, raw } => {
                write!(f, "non-integer number {raw} at {path} in canonical JSON")
            }
            Self::Serialize { message } => write!(f, "canonical JSON: {message}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Render a path cost for a report: `"418.000000"`, or `null` when the run
/// has no finite cost.
#[must_use]
pub fn cost_value(cost: f64) -> Value {
    if cost.is_finite() {
        Value::String(format!("{cost:.COST_PRECISION$}"))
    } else {
        Value::Null
    }
}

/// Produce canonical JSON bytes from `value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] naming the first float found,
/// in key order.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut path = String::new();
    reject_floats(value, &mut path)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        message: e.to_string(),
    })
}

fn reject_floats(value: &Value, path: &mut String) -> Result<(), CanonError> {
    let len = path.len();
    let result = match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => Err(CanonError::NonIntegerNumber {
            path: if path.is_empty() { "/".into() } else { path.clone() },
            raw: n.to_string(),
        }),
        Value::Array(items) => items.iter().enumerate().try_for_each(|(i, item)| {
            path.truncate(len);
            path.push_str(&format!("/{i}"));
            reject_floats(item, path)
        }),
        Value::Object(map) => map.iter().try_for_each(|(key, item)| {
            path.truncate(len);
            path.push('/');
            path.push_str(key);
            reject_floats(item, path)
        }),
        _ => Ok(()),
    };
    path.truncate(len);
    result
}
