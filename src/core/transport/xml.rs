//! SOAP envelope encoding and reply decoding.

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::core::casing::snake_case;
use crate::error::TransportError;

const SOAP_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Render `message` as the body of a SOAP 1.1 request for `action`.
///
/// Every key becomes an element in the `tns` namespace. Null values are
/// omitted and arrays repeat their element.
pub fn encode_envelope(action: &str, namespace: &str, message: &Value) -> String {
    let mut out = String::with_capacity(512);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push_str(&format!(
        r#"<soap:Envelope xmlns:soap="{}" xmlns:tns="{}"><soap:Body>"#,
        SOAP_NS,
        escape(namespace)
    ));
    write_element(&mut out, action, message);
    out.push_str("</soap:Body></soap:Envelope>");
    out
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                write_element(out, name, item);
            }
        }
        Value::Object(map) => {
            out.push_str(&format!("<tns:{}>", name));
            for (key, child) in map {
                write_element(out, key, child);
            }
            out.push_str(&format!("</tns:{}>", name));
        }
        Value::Bool(b) => out.push_str(&format!("<tns:{0}>{1}</tns:{0}>", name, b)),
        Value::Number(n) => out.push_str(&format!("<tns:{0}>{1}</tns:{0}>", name, n)),
        Value::String(s) => out.push_str(&format!("<tns:{0}>{1}</tns:{0}>", name, escape(s.as_str()))),
    }
}

struct Frame {
    name: String,
    children: Map<String, Value>,
    text: String,
    nil: bool,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, TransportError> {
        Ok(Self {
            name: element_name(start)?,
            children: Map::new(),
            text: String::new(),
            nil: is_nil(start),
        })
    }

    fn into_value(self) -> (String, Value) {
        let value = if self.nil {
            Value::Null
        } else if !self.children.is_empty() {
            Value::Object(self.children)
        } else {
            Value::String(self.text.trim().to_string())
        };
        (self.name, value)
    }
}

/// Decode a reply document into a tree keyed by snake_case local names.
///
/// Namespace prefixes are dropped and repeated siblings collect into an
/// array. Leaf text is always a string, so an empty element is `""`. Only
/// `xsi:nil` elements decode to null.
pub fn decode_reply(xml: &str) -> Result<Value, TransportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root = Map::new();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| TransportError::Decode(format!("malformed XML: {}", e)))?;

        match event {
            Event::Start(start) => stack.push(Frame::open(&start)?),
            Event::Empty(start) => {
                let name = element_name(&start)?;
                let value = if is_nil(&start) {
                    Value::Null
                } else {
                    Value::String(String::new())
                };
                let parent = stack.last_mut().map(|f| &mut f.children).unwrap_or(&mut root);
                insert(parent, name, value);
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| TransportError::Decode(format!("bad text node: {}", e)))?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                let data = data.into_inner();
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| TransportError::Decode("unbalanced closing tag".to_string()))?;
                let (name, value) = frame.into_value();
                let parent = stack.last_mut().map(|f| &mut f.children).unwrap_or(&mut root);
                insert(parent, name, value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(TransportError::Decode("unexpected end of document".to_string()));
    }
    Ok(Value::Object(root))
}

fn element_name(start: &BytesStart<'_>) -> Result<String, TransportError> {
    let local = start.local_name();
    let name = std::str::from_utf8(local.as_ref())
        .map_err(|e| TransportError::Decode(format!("non UTF-8 element name: {}", e)))?;
    Ok(snake_case(name))
}

fn is_nil(start: &BytesStart<'_>) -> bool {
    start.attributes().flatten().any(|attr| {
        attr.key.local_name().as_ref() == b"nil"
            && matches!(attr.value.as_ref(), b"true" | b"1")
    })
}

fn insert(parent: &mut Map<String, Value>, name: String, value: Value) {
    match parent.get_mut(&name) {
        None => {
            parent.insert(name, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = std::mem::take(existing);
            *existing = Value::Array(vec![first, value]);
        }
    }
}

/// Pull a SOAP 1.1 fault out of a decoded reply, if there is one
pub fn fault(reply: &Value) -> Option<TransportError> {
    let fault = reply.get("envelope")?.get("body")?.get("fault")?;
    Some(TransportError::Fault {
        code: fault_text(fault, "faultcode"),
        reason: fault_text(fault, "faultstring"),
    })
}

fn fault_text(fault: &Value, key: &str) -> String {
    match fault.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "unknown".to_string(),
        Some(other) => other.to_string(),
    }
}
