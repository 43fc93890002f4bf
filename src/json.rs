//! This module exports different types for JSON interactions.
//!
//! Interaction bodies are always decoded from the raw bytes that were signed, never from a
//! re-serialized value.

use serde::de::{DeserializeOwned, Error as DeError};
use serde::ser::Serialize;

use crate::Result;

pub use serde_json::json;
pub use serde_json::Error as JsonError;
pub type Value = serde_json::Value;
pub type JsonMap = serde_json::Map<String, Value>;

/// Decodes a successful response body. An empty body (Discord answers some routes with
/// `204 No Content`) decodes to `None`.
pub(crate) async fn decode_resp<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Option<T>> {
    let bytes = resp.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_slice(&bytes)?))
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn to_vec<T>(v: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    Ok(serde_json::to_vec(v)?)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn from_slice<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_slice(bytes)?)
}

pub(crate) fn from_value<T>(v: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(v)?)
}

/// Deserializes an already-extracted JSON value inside a `Deserialize` impl, keeping the error
/// type of the outer deserializer.
pub(crate) fn deserialize_val<T, E>(val: Value) -> std::result::Result<T, E>
where
    T: DeserializeOwned,
    E: DeError,
{
    T::deserialize(val).map_err(E::custom)
}

#[cfg(test)]
pub(crate) fn to_value<T>(value: T) -> Result<Value>
where
    T: Serialize,
{
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
#[track_caller]
pub(crate) fn assert_json<T>(data: &T, json: crate::json::Value)
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    // test serialization
    let serialized = to_value(data).unwrap();
    assert!(
        serialized == json,
        "data->JSON serialization failed\nexpected: {json:?}\n     got: {serialized:?}"
    );

    // test deserialization
    let deserialized = from_value::<T>(json).unwrap();
    assert!(
        &deserialized == data,
        "JSON->data deserialization failed\nexpected: {data:?}\n     got: {deserialized:?}"
    );
}
