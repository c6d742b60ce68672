use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// A registered identity record: a display name plus the public keys the
/// service uses to share data with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub identity: Identity,
    #[serde(default)]
    pub display_name: String,
    #[serde(rename = "wallet_pub_key", default)]
    pub wallet_pub_keys: Vec<String>,
    #[serde(default)]
    pub wallet_address: Vec<String>,
    #[serde(rename = "tessera_pub_key", default)]
    pub tessera_pub_keys: Vec<String>,
    #[serde(default)]
    pub tenant: String,
}

/// Request body for creating a subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSubject {
    pub display_name: String,
    #[serde(rename = "wallet_pub_key")]
    pub wallet_pub_keys: Vec<String>,
    #[serde(rename = "tessera_pub_key")]
    pub tessera_pub_keys: Vec<String>,
}

impl NewSubject {
    pub fn new(
        display_name: impl Into<String>,
        wallet_pub_keys: Vec<String>,
        tessera_pub_keys: Vec<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            wallet_pub_keys,
            tessera_pub_keys,
        }
    }
}

/// Partial update of a subject. Only the fields that are set are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "wallet_pub_key", skip_serializing_if = "Option::is_none")]
    pub wallet_pub_keys: Option<Vec<String>>,
    #[serde(rename = "tessera_pub_key", skip_serializing_if = "Option::is_none")]
    pub tessera_pub_keys: Option<Vec<String>>,
}

impl SubjectUpdate {
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_wallet_pub_keys(mut self, keys: Vec<String>) -> Self {
        self.wallet_pub_keys = Some(keys);
        self
    }

    pub fn with_tessera_pub_keys(mut self, keys: Vec<String>) -> Self {
        self.tessera_pub_keys = Some(keys);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.wallet_pub_keys.is_none()
            && self.tessera_pub_keys.is_none()
    }
}
