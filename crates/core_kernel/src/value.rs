//! Format-neutral field values
//!
//! Both wire formats are adapted into the same small tree before any entity
//! sees them, so each entity has exactly one decode routine:
//!
//! - an XML element with child elements becomes a named [`Record`];
//! - an XML leaf element becomes [`Value::Text`] (or [`Value::Null`] when it
//!   carries `nil="true"`);
//! - a JSON object becomes a [`Record`], named after the key it sits under;
//! - JSON arrays, numbers, booleans and strings map onto the matching variant.

/// A single field value of unknown shape
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    /// Returns true for `null` / `nil="true"`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the text content of a scalar text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the record behind an object-shaped value
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

/// An ordered set of named fields
///
/// XML records always carry the element name. JSON records carry the key
/// they were found under, or no name for array items and bare documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    name: Option<String>,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record with the given element or key name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// Creates an empty record without a name
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(name: Option<String>, fields: Vec<(String, Value)>) -> Self {
        Self { name, fields }
    }

    /// Appends a field, keeping insertion order
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Builder-style variant of [`Record::push`]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(key, value)` pairs in source order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the first value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Iterates over every value stored under `key`
    ///
    /// XML containers repeat the item element once per entry, so this is how
    /// list items are found on the XML side.
    pub fn values_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.fields
            .iter()
            .filter(move |(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Unwraps `{"<root>": {...}}` when this anonymous record is such a wrapper
    pub fn unwrap_root(&self, root: &str) -> Option<&Record> {
        if self.name.is_some() || self.fields.len() != 1 {
            return None;
        }
        match &self.fields[0] {
            (key, Value::Record(inner)) if key == root => Some(inner),
            _ => None,
        }
    }
}
