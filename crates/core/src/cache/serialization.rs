//! Serialization of gateway results to and from cache bytes.
//!
//! Cached values are the JSON documents the gateway returns, stored
//! as their JSON encoding so cache contents stay human-readable when
//! debugging.

use serde_json::Value;

use super::{CacheError, Result};

/// Serializes a gateway result to JSON bytes.
pub fn serialize_value(value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Deserializes JSON bytes back into a gateway result.
pub fn deserialize_value(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| CacheError::Serialization(e.to_string()))
}
