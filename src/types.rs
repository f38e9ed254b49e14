//! Common types used throughout hiring-bridge
//!
//! Shared type aliases and small helpers used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type; insertion order is preserved
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Value helpers
// ============================================================================

/// Canonical string form of a scalar JSON value
///
/// The remote API is inconsistent about sending ids as strings or numbers,
/// so id comparisons go through this. Returns `None` for null, arrays and
/// objects.
pub fn scalar_to_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whether a value counts as missing (the table's absent marker)
pub fn is_absent(value: &JsonValue) -> bool {
    value.is_null()
}
