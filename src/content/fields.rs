//! Lenient field access over untyped GitHub context documents.
//!
//! The contexts are populated by the Actions runner, so a missing or
//! wrong-typed key is treated as "not available" and degrades to an
//! empty value instead of failing the run.

use serde_json::{Map, Value};

/// A parsed JSON object, as handed over by the runner.
pub type JsonObject = Map<String, Value>;

/// Return `map[key]` when it is a JSON string, otherwise an empty string.
pub fn str_field(map: &JsonObject, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Return `map[key]` when it is a JSON object, otherwise an empty object.
pub fn object_field(map: &JsonObject, key: &str) -> JsonObject {
    match map.get(key) {
        Some(Value::Object(obj)) => obj.clone(),
        _ => JsonObject::new(),
    }
}
