//! JSON and YAML codecs for catalog files, exports and configs.
//!
//! Object keys keep their insertion order everywhere except the canonical
//! encoding, which sorts them at every depth. Exports and content digests use
//! the canonical form; schema definitions shown for search or editing keep the
//! author's order.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, PvrError};

fn codec_error<E: ToString>(code: &'static str) -> impl FnOnce(E) -> PvrError {
    move |err| PvrError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Rebuilds every object in `value` with its keys in sorted order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, nested)| (key, sort_keys(nested)))
                .collect();
            Value::Object(sorted.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        scalar => scalar,
    }
}

/// Serializes a value into compact JSON bytes with object keys sorted at every depth.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, PvrError> {
    let value = serde_json::to_value(value).map_err(codec_error("json_serialize"))?;
    serde_json::to_vec(&sort_keys(value)).map_err(codec_error("json_write"))
}

/// Serializes a value into indented JSON, keys in insertion order.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, PvrError> {
    serde_json::to_string_pretty(value).map_err(codec_error("json_serialize"))
}

/// Deserializes a catalog or export from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, PvrError> {
    serde_json::from_slice(data).map_err(codec_error("json_deserialize"))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, PvrError> {
    serde_yaml::to_string(value).map_err(codec_error("yaml_serialize"))
}

/// Deserializes a catalog, config or filter preset from YAML bytes.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, PvrError> {
    serde_yaml::from_slice(data).map_err(codec_error("yaml_deserialize"))
}
