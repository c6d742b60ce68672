use archivist_protocol::{flatten, QueryParams};
use archivist_types::Attributes;
use serde_json::{Map, Value};

/// Filter for list, count and signature lookups.
///
/// Top-level properties and attribute maps are flattened to dotted query
/// parameters, e.g. `attributes.arc_display_type=door`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    fields: Map<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match a top-level property such as `display_name`.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Match an asset or location attribute.
    pub fn attribute(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.nested("attributes", key, value)
    }

    pub fn event_attribute(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.nested("event_attributes", key, value)
    }

    pub fn asset_attribute(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.nested("asset_attributes", key, value)
    }

    /// Match every entry of `attrs` under the `attributes` map.
    pub fn attributes(self, attrs: &Attributes) -> Self {
        attrs
            .iter()
            .fold(self, |f, (k, v)| f.attribute(k.clone(), v.clone()))
    }

    /// Add `key` under the `group` map. A scalar previously set on `group`
    /// via [`prop`](Self::prop) is replaced by the map.
    fn nested(mut self, group: &str, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let entry = self
            .fields
            .entry(group.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(map) = entry {
            map.insert(key.into(), value.into());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_query(&self) -> QueryParams {
        flatten(&Value::Object(self.fields.clone()))
    }
}
