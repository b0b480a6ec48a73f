use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// Inbound POST body. `None` when the caller sent nothing usable.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundPayload(pub Option<Value>);

impl InboundPayload {
    /// Decodes the body the way the function host exposes it, keyed on `Content-Type`:
    /// JSON is parsed (empty means `{}`), `text/plain` is kept as a string, anything
    /// else is dropped. No shape checks on the decoded value.
    pub fn from_request(content_type: Option<&str>, raw: &[u8]) -> Result<Self> {
        match content_type.map(media_type).as_deref() {
            Some("application/json") => {
                if raw.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(Some(Value::Object(Map::new()))));
                }
                serde_json::from_slice(raw)
                    .map(|v| Self(Some(v)))
                    .map_err(|_| AppError::Forwarding("Invalid JSON".into()))
            }
            Some("text/plain") => Ok(Self(Some(Value::String(
                String::from_utf8_lossy(raw).into_owned(),
            )))),
            _ => Ok(Self(None)),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.0.as_ref()
    }
}

// "Application/JSON; charset=utf-8" -> "application/json"
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// What the destination answered, relayed unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

#[derive(Serialize, Debug)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self { status: "error", message: message.into() }
    }
}
