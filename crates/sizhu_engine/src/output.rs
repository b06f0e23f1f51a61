//! Deterministic payload serialization.
//!
//! The payload is converted to a JSON value tree, numeric fields are rounded
//! to their declared precision, and the tree is emitted compactly. The
//! default `serde_json` map keeps keys in lexicographic order and leaves
//! Unicode unescaped, so equal inputs serialize to identical bytes.

use serde_json::Value;

use crate::error::EngineError;
use crate::payload::EnginePayload;

/// Declared output precision per field path.
const ROUNDING_TABLE: [(&[&str], i32); 8] = [
    (&["intermediate", "solar_longitude_deg"], 6),
    (&["intermediate", "equation_of_time_minutes"], 2),
    (&["intermediate", "delta_t_seconds"], 1),
    (&["intermediate", "tt_julian_date"], 8),
    (&["pillars", "year", "boundary", "distance_seconds"], 1),
    (&["pillars", "month", "boundary", "distance_seconds"], 1),
    (&["flags", "hour_boundary_proximity_seconds"], 1),
    (&["flags", "model_uncertainty_seconds"], 1),
];

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

fn round_field(root: &mut Value, path: &[&str], digits: i32) {
    let mut node = root;
    for key in &path[..path.len() - 1] {
        match node.get_mut(key) {
            Some(next) => node = next,
            None => return,
        }
    }
    let last = path[path.len() - 1];
    if let Some(slot) = node.get_mut(last) {
        if let Some(number) = slot.as_f64() {
            *slot = Value::from(round_to(number, digits));
        }
    }
}

/// Apply the declared rounding to a serialized payload tree.
pub fn normalize_output_precision(root: &mut Value) {
    for (path, digits) in ROUNDING_TABLE {
        round_field(root, path, digits);
    }
}

/// Canonical JSON bytes of a payload: sorted keys at every level, compact
/// separators, Unicode preserved.
pub fn dumps_deterministic(payload: &EnginePayload) -> Result<String, EngineError> {
    let mut value = serde_json::to_value(payload)?;
    normalize_output_precision(&mut value);
    Ok(serde_json::to_string(&value)?)
}
