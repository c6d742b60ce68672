use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoint::params;
use crate::error::{ProtocolError, ProtocolResult};

/// One page of a list response: `{ "<label>": [...], "next_page_token": "..." }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode a list response whose items sit under `label`.
    ///
    /// An empty `next_page_token` is treated as the last page.
    pub fn from_value(label: &str, mut body: Value) -> ProtocolResult<Self> {
        let items = body
            .get_mut(label)
            .map(Value::take)
            .ok_or_else(|| ProtocolError::MissingField(label.to_string()))?;
        let items: Vec<T> = serde_json::from_value(items)
            .map_err(|e| ProtocolError::Deserialization(e.to_string()))?;
        let next_page_token = body
            .get(params::NEXT_PAGE_TOKEN)
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Ok(Self { items, next_page_token })
    }
}
