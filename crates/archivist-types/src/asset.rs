use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::confirmation::ConfirmationStatus;
use crate::identity::Identity;
use crate::storage_integrity::StorageIntegrity;

/// Free-form attribute map carried by assets, events and locations.
pub type Attributes = BTreeMap<String, Value>;

/// A tracked thing on the Archivist, described by attributes and evolved by
/// events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub identity: Identity,
    #[serde(default)]
    pub behaviours: Vec<String>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    #[serde(default)]
    pub tracked: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub at_time: String,
    #[serde(default)]
    pub storage_integrity: StorageIntegrity,
}

impl Asset {
    /// Look up a string attribute such as `arc_display_name`.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

/// Request body for creating an asset.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewAsset {
    pub behaviours: Vec<String>,
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_integrity: Option<StorageIntegrity>,
}

impl NewAsset {
    pub fn new(behaviours: Vec<String>, attributes: Attributes) -> Self {
        Self {
            behaviours,
            attributes,
            storage_integrity: None,
        }
    }

    pub fn with_storage_integrity(mut self, storage_integrity: StorageIntegrity) -> Self {
        self.storage_integrity = Some(storage_integrity);
        self
    }
}
