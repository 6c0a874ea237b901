//! JSON serialization for resampling results.

use serde::Serialize;

/// Serialize a result to a compact JSON string.
///
/// Works for every result type of this crate.
///
/// # Errors
///
/// Returns an error if serialization fails. Undefined statistics serialize
/// as `null`, so this should not happen for the crate's result types.
pub fn to_json<T: Serialize>(result: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize>(result: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
