//! # Graph Document Encoding
//!
//! Lenient parse and canonical re-encode of the stored document.
//!
//! The write path accepts any JSON object. Missing fields, wrong field
//! types, duplicate ids and dangling edges all pass through untouched. The
//! parsed value is re-encoded compactly with object keys in their original
//! order (`serde_json` is built with `preserve_order`), so a document read
//! back is structurally identical to the one written. Floats are parsed
//! with `float_roundtrip`, so every coordinate is re-encoded to the same
//! shortest decimal it arrived as.

use crate::{AdvGraphError, primitives::DEFAULT_DOCUMENT};
use serde_json::Value;

/// Parse request bytes into a generic document.
///
/// Fails with `MalformedDocument` on invalid JSON and `NotAnObject` when the
/// top-level value is anything but an object.
pub fn parse_document(bytes: &[u8]) -> Result<Value, AdvGraphError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AdvGraphError::MalformedDocument(e.to_string()))?;

    if !value.is_object() {
        return Err(AdvGraphError::NotAnObject(json_type_name(&value)));
    }

    Ok(value)
}

/// Encode a parsed document in canonical (compact, order-preserving) form.
pub fn to_canonical(document: &Value) -> Result<Vec<u8>, AdvGraphError> {
    serde_json::to_vec(document).map_err(|e| AdvGraphError::Serialization(e.to_string()))
}

/// Bytes served for the "absent" state.
#[must_use]
pub fn default_document() -> Vec<u8> {
    DEFAULT_DOCUMENT.as_bytes().to_vec()
}

/// Human-readable JSON type name for error messages.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// TESTS
// =============================================================================
