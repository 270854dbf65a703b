//! Entity decoding entry points
//!
//! An entity implements [`Decode::decode_fields`] once, over a [`Record`];
//! the XML and JSON entry points are provided on top of it.

use crate::error::DecodeError;
use crate::json;
use crate::value::{Record, Value};
use crate::xml;

/// A provider entity that can be built from a payload
pub trait Decode: Sized {
    /// The element name / wrapper key the provider uses for this entity
    const ROOT: &'static str;

    /// Reads the entity's fields from a record already known to be valid
    ///
    /// Unknown keys must be ignored.
    fn decode_fields(record: &Record) -> Result<Self, DecodeError>;

    /// Decodes a record that must be named [`Decode::ROOT`] (when named)
    fn from_record(record: &Record) -> Result<Self, DecodeError> {
        Self::from_record_as(record, Self::ROOT)
    }

    /// Decodes a record that must be named `root` (when named) and non-empty
    fn from_record_as(record: &Record, root: &str) -> Result<Self, DecodeError> {
        if let Some(name) = record.name() {
            if name != root {
                return Err(DecodeError::unexpected_root(root, name));
            }
        }
        if record.is_empty() {
            return Err(DecodeError::empty(root));
        }
        Self::decode_fields(record)
    }

    /// Decodes any value, unwrapping `{"<root>": {...}}` wrappers
    fn from_value_as(value: &Value, root: &str) -> Result<Self, DecodeError> {
        match value {
            Value::Record(record) => {
                let record = record.unwrap_root(root).unwrap_or(record);
                Self::from_record_as(record, root)
            }
            Value::Null => Err(DecodeError::missing(root)),
            _ => Err(DecodeError::empty(root)),
        }
    }

    /// Decodes an XML document whose root element is [`Decode::ROOT`]
    fn from_xml_str(text: &str) -> Result<Self, DecodeError> {
        Self::from_xml_str_as(text, Self::ROOT)
    }

    /// Decodes an XML document whose root element is `root`
    fn from_xml_str_as(text: &str, root: &str) -> Result<Self, DecodeError> {
        let (name, value) = xml::parse_document(text)?;
        if name != root {
            return Err(DecodeError::unexpected_root(root, name));
        }
        Self::from_value_as(&value, root)
    }

    /// Decodes a JSON document of the form `{"<ROOT>": {...}}`
    fn from_json_str(text: &str) -> Result<Self, DecodeError> {
        Self::from_json_str_as(text, Self::ROOT)
    }

    /// Decodes a JSON document of the form `{"<root>": {...}}`
    fn from_json_str_as(text: &str, root: &str) -> Result<Self, DecodeError> {
        let value = json::parse_document(text, root)?;
        Self::from_value_as(&value, root)
    }

    /// Decodes a bare JSON object (a wrapped one is unwrapped)
    fn from_json_value(value: &serde_json::Value) -> Result<Self, DecodeError> {
        Self::from_value_as(&json::from_json_value(value), Self::ROOT)
    }
}
