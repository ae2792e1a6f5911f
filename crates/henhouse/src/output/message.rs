//! Confirmation for commands that change data.

use serde::Serialize;

/// A confirmation line, optionally carrying the affected document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<serde_json::Value>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            item: None,
        }
    }

    pub fn with_item<T: Serialize>(mut self, item: &T) -> Result<Self, serde_json::Error> {
        self.item = Some(serde_json::to_value(item)?);
        Ok(self)
    }
}
