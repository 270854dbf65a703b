//! JSON adapter
//!
//! Converts `serde_json` values into the shared [`Value`] tree.

use serde_json::{Map, Value as JsonValue};

use crate::error::DecodeError;
use crate::value::{Record, Value};

/// Converts a JSON value; objects become anonymous records
pub fn from_json_value(value: &JsonValue) -> Value {
    convert(value, None)
}

/// Converts a JSON object into a record with the given name
pub fn record_from_map(map: &Map<String, JsonValue>, name: Option<&str>) -> Record {
    let fields = map
        .iter()
        .map(|(key, value)| (key.clone(), convert(value, Some(key))))
        .collect();
    Record::from_parts(name.map(str::to_string), fields)
}

fn convert(value: &JsonValue, name: Option<&str>) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(flag) => Value::Bool(*flag),
        JsonValue::Number(number) => match number.as_i64() {
            Some(integer) => Value::Integer(integer),
            None => number.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        JsonValue::String(text) => Value::Text(text.clone()),
        JsonValue::Array(items) => Value::List(items.iter().map(|item| convert(item, None)).collect()),
        JsonValue::Object(map) => Value::Record(record_from_map(map, name)),
    }
}

/// Parses a JSON document of the form `{"<root>": {...}}`
///
/// Returns the value stored under `root`, as a record named `root` when it
/// is an object.
///
/// # Errors
///
/// - [`DecodeError::MalformedJson`] if the text is not JSON
/// - [`DecodeError::MissingArgument`] if the document is `null`
/// - [`DecodeError::EmptyPayload`] if the document is `{}` or not an object
/// - [`DecodeError::UnexpectedRoot`] if no key matches `root`
pub fn parse_document(text: &str, root: &str) -> Result<Value, DecodeError> {
    let document: JsonValue = serde_json::from_str(text)?;

    match document {
        JsonValue::Object(map) => {
            if map.is_empty() {
                return Err(DecodeError::empty(root));
            }
            match map.get(root) {
                Some(inner) => Ok(convert(inner, Some(root))),
                None => {
                    let found = map.keys().next().cloned().unwrap_or_default();
                    Err(DecodeError::unexpected_root(root, found))
                }
            }
        }
        JsonValue::Null => Err(DecodeError::missing(root)),
        _ => Err(DecodeError::empty(root)),
    }
}
