/// Request payloads assembled from command-line input
use crate::error::{CliError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Build a typed payload from an optional JSON object plus named fields.
///
/// Fields given explicitly replace the same keys in `json`; `None` fields
/// are left alone.
pub fn build<T: DeserializeOwned>(json: Option<&str>, fields: &[(&str, Option<&str>)]) -> Result<T> {
    let mut object = match json {
        Some(raw) => match serde_json::from_str(raw) {
            Ok(Value::Object(object)) => object,
            Ok(_) => return Err(CliError::Payload("expected a JSON object".to_string())),
            Err(e) => return Err(CliError::Payload(e.to_string())),
        },
        None => Map::new(),
    };

    for (key, value) in fields.iter().filter_map(|(k, v)| v.map(|v| (k, v))) {
        object.insert((*key).to_string(), Value::String(value.to_string()));
    }

    serde_json::from_value(Value::Object(object)).map_err(|e| CliError::Payload(e.to_string()))
}
