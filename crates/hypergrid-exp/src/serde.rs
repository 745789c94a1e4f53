use hypergrid_core::errors::{ErrorInfo, GridError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Serializes a value to canonical JSON bytes with recursively key-sorted
/// objects, suitable for stable hashing and byte-exact comparison.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, GridError> {
    let value = serde_json::to_value(value)
        .map_err(|err| GridError::Serde(ErrorInfo::new("json-encode", err.to_string())))?;
    serde_json::to_vec(&canonicalize(value))
        .map_err(|err| GridError::Serde(ErrorInfo::new("json-bytes", err.to_string())))
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GridError> {
    serde_json::from_slice(bytes)
        .map_err(|err| GridError::Serde(ErrorInfo::new("json-decode", err.to_string())))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted: Vec<(String, Value)> = map.into_iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            let mut out = Map::new();
            for (key, inner) in sorted {
                out.insert(key, canonicalize(inner));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
