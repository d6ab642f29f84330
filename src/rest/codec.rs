//! JSON encoding and decoding for resource bodies.
//!
//! Encoding is sparse: models mark optional fields with
//! `skip_serializing_if = "Option::is_none"` and server-owned fields with
//! `skip_serializing`, so only what the caller set goes on the wire.
//! Decoding ignores unknown fields.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::rest::{DecodeError, ResourceError};

/// Serializes a request body.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if serialization fails.
pub fn encode<T: Serialize + ?Sized>(resource: &'static str, value: &T) -> Result<Value, ResourceError> {
    serde_json::to_value(value).map_err(|e| ResourceError::Encode {
        resource,
        message: e.to_string(),
    })
}

/// Deserializes a response body.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBody`] on type mismatches or missing
/// required fields.
pub fn decode<T: DeserializeOwned>(resource: &'static str, body: Value) -> Result<T, DecodeError> {
    serde_json::from_value(body).map_err(|e| DecodeError::InvalidBody {
        resource,
        message: e.to_string(),
    })
}

/// Deserializes a resource that must carry a non-empty `id`.
///
/// # Errors
///
/// Returns [`DecodeError::MissingId`] when `id` is absent or empty, and
/// [`DecodeError::InvalidBody`] when the body does not match `T`.
pub fn decode_identified<T: DeserializeOwned>(
    resource: &'static str,
    body: Value,
) -> Result<T, DecodeError> {
    let has_id = body
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.is_empty());

    if !has_id {
        return Err(DecodeError::MissingId { resource });
    }

    decode(resource, body)
}

/// Extracts and decodes the item array stored under `key` in a list body.
///
/// A missing key decodes as an empty list.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBody`] if the key holds something other
/// than an array, or an item does not match `T`.
pub fn decode_list<T: DeserializeOwned>(
    resource: &'static str,
    body: &Value,
    key: &str,
) -> Result<Vec<T>, DecodeError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items @ Value::Array(_)) => decode(resource, items.clone()),
        Some(_) => Err(DecodeError::InvalidBody {
            resource,
            message: format!("expected `{key}` to be an array"),
        }),
    }
}

/// Flattens a params struct into query parameters.
///
/// Nulls are skipped, scalars are stringified and arrays are comma-joined.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if the params cannot be serialized.
pub fn encode_query<T: Serialize>(
    resource: &'static str,
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = encode(resource, params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
