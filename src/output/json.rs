//! JSON serialization for reports.

use serde::Serialize;

/// Serialize any report type to a compact JSON string.
pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize any report type to pretty-printed JSON.
pub fn to_json_pretty<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
