use serde::{Deserialize, Serialize};

use crate::asset::Attributes;
use crate::confirmation::ConfirmationStatus;
use crate::identity::Identity;

/// Something that happened to an asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub identity: Identity,
    pub asset_identity: Identity,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub behaviour: String,
    #[serde(default)]
    pub event_attributes: Attributes,
    #[serde(default)]
    pub asset_attributes: Attributes,
    #[serde(default)]
    pub timestamp_declared: String,
    #[serde(default)]
    pub timestamp_accepted: String,
    #[serde(default)]
    pub principal_declared: Option<Principal>,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
}

/// Who claims to have performed an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issuer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

/// Request body for recording an event against an asset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewEvent {
    pub operation: String,
    pub behaviour: String,
    pub event_attributes: Attributes,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub asset_attributes: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_declared: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_declared: Option<Principal>,
}

impl NewEvent {
    pub fn new(operation: impl Into<String>, behaviour: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            behaviour: behaviour.into(),
            event_attributes: Attributes::new(),
            asset_attributes: Attributes::new(),
            timestamp_declared: None,
            principal_declared: None,
        }
    }

    pub fn with_event_attributes(mut self, attrs: Attributes) -> Self {
        self.event_attributes = attrs;
        self
    }

    pub fn with_asset_attributes(mut self, attrs: Attributes) -> Self {
        self.asset_attributes = attrs;
        self
    }

    pub fn with_timestamp_declared(mut self, ts: impl Into<String>) -> Self {
        self.timestamp_declared = Some(ts.into());
        self
    }

    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal_declared = Some(principal);
        self
    }
}
