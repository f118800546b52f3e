use serde::{Serialize, Serializer};
use tracing::debug;

/// The provider's raw fixture payload, stored as text. It usually holds a JSON
/// document, but nothing upstream guarantees that.
///
/// Serializing emits the decoded JSON value when the text parses, and the
/// text itself otherwise, so one bad payload never fails a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload(pub Option<String>);

/// The JSON-safe view of a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue<'a> {
    Missing,
    Json(serde_json::Value),
    Text(&'a str),
}

impl RawPayload {
    pub fn new(text: impl Into<String>) -> Self {
        RawPayload(Some(text.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn decoded(&self) -> PayloadValue<'_> {
        match self.0.as_deref() {
            None => PayloadValue::Missing,
            Some("") => PayloadValue::Text(""),
            Some(text) => match serde_json::from_str::<serde_json::Value>(text) {
                Ok(value) => PayloadValue::Json(value),
                Err(e) => {
                    debug!(error = %e, bytes = text.len(), "raw_data is not JSON; keeping text");
                    PayloadValue::Text(text)
                }
            },
        }
    }
}

impl From<Option<String>> for RawPayload {
    fn from(text: Option<String>) -> Self {
        RawPayload(text)
    }
}

impl Serialize for RawPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.decoded() {
            PayloadValue::Missing => serializer.serialize_none(),
            PayloadValue::Json(value) => value.serialize(serializer),
            PayloadValue::Text(text) => serializer.serialize_str(text),
        }
    }
}
