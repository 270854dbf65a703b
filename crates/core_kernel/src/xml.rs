//! XML adapter
//!
//! Streams a document with `quick-xml` and folds it into a [`Value`] tree.
//! Attributes other than `nil` are ignored; `type="array"` hints are not
//! needed because list fields are resolved by item tag at decode time.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::DecodeError;
use crate::value::{Record, Value};

/// Element that has been opened but not yet closed
struct OpenElement {
    name: String,
    nil: bool,
    text: String,
    children: Vec<(String, Value)>,
}

impl OpenElement {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, DecodeError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut nil = false;

        for attribute in start.attributes() {
            let attribute = attribute.map_err(DecodeError::malformed_xml)?;
            if attribute.key.as_ref() == b"nil" {
                let raw = attribute
                    .unescape_value()
                    .map_err(DecodeError::malformed_xml)?;
                nil = raw.trim().eq_ignore_ascii_case("true");
            }
        }

        Ok(Self {
            name,
            nil,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn close(self) -> (String, Value) {
        let value = if !self.children.is_empty() {
            Value::Record(Record::from_parts(Some(self.name.clone()), self.children))
        } else if self.nil {
            Value::Null
        } else if self.text.trim().is_empty() {
            Value::Text(String::new())
        } else {
            Value::Text(self.text)
        };
        (self.name, value)
    }
}

/// Parses an XML document and returns its root element name and value
///
/// # Errors
///
/// Returns [`DecodeError::MalformedXml`] when the text is not well-formed
/// or contains no root element.
pub fn parse_document(text: &str) -> Result<(String, Value), DecodeError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<OpenElement> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(DecodeError::malformed_xml)?;

        match event {
            Event::Start(start) => stack.push(OpenElement::from_start(&start)?),
            Event::Empty(start) => {
                let element = OpenElement::from_start(&start)?;
                if let Some(root) = attach(&mut stack, element.close()) {
                    return Ok(root);
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| DecodeError::malformed_xml("unbalanced end tag"))?;
                if let Some(root) = attach(&mut stack, element.close()) {
                    return Ok(root);
                }
            }
            Event::Text(content) => {
                if let Some(open) = stack.last_mut() {
                    let unescaped = content
                        .unescape()
                        .map_err(DecodeError::malformed_xml)?;
                    open.text.push_str(&unescaped);
                }
            }
            Event::CData(content) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&content));
                }
            }
            Event::Eof => {
                let message = if stack.is_empty() {
                    "document has no root element"
                } else {
                    "unexpected end of document"
                };
                return Err(DecodeError::malformed_xml(message));
            }
            _ => {}
        }
    }
}

/// Hands a closed element to its parent, or returns it when it was the root
fn attach(stack: &mut [OpenElement], closed: (String, Value)) -> Option<(String, Value)> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(closed);
            None
        }
        None => Some(closed),
    }
}
