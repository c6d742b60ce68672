use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Server-assigned name of an Archivist resource.
///
/// An `Identity` is a path of `collection/uuid` pairs, e.g.
/// `subjects/5b8b8e1e-...` or, for resources nested under an asset,
/// `assets/0e1d.../events/9a2c...`. The server mints identities; the
/// client only parses them far enough to build request URLs.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(String);

impl Identity {
    /// Parse an identity, checking it is made of non-empty
    /// `collection/uuid` segment pairs.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let segments: Vec<&str> = s.split('/').collect();
        if segments.len() < 2 || segments.len() % 2 != 0 {
            return Err(TypeError::InvalidIdentity(s.to_string()));
        }
        if segments.iter().any(|seg| seg.is_empty()) {
            return Err(TypeError::InvalidIdentity(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Build an identity from a collection label and uuid string.
    pub fn new(collection: &str, uuid: &str) -> Result<Self, TypeError> {
        Self::parse(&format!("{collection}/{uuid}"))
    }

    /// The full identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The top-level collection, e.g. `assets` for an event identity.
    pub fn collection(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// The trailing uuid segment.
    pub fn uuid(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// The trailing uuid segment parsed as a [`uuid::Uuid`].
    pub fn as_uuid(&self) -> Result<uuid::Uuid, TypeError> {
        uuid::Uuid::parse_str(self.uuid()).map_err(|e| TypeError::InvalidUuid(e.to_string()))
    }

    /// Identity of the parent resource (`assets/x` for `assets/x/events/y`).
    pub fn parent(&self) -> Option<Identity> {
        let segments: Vec<&str> = self.0.split('/').collect();
        if segments.len() <= 2 {
            return None;
        }
        Some(Self(segments[..segments.len() - 2].join("/")))
    }
}

impl FromStr for Identity {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SUBJECT: &str = "subjects/7e6c3f0a-1b2c-4d5e-8f90-a1b2c3d4e5f6";

    #[test]
    fn parse_subject_identity() {
        let id = Identity::parse(SUBJECT).unwrap();
        assert_eq!(id.collection(), "subjects");
        assert_eq!(id.uuid(), "7e6c3f0a-1b2c-4d5e-8f90-a1b2c3d4e5f6");
        assert!(id.as_uuid().is_ok());
        assert!(id.parent().is_none());
    }

    #[test]
    fn parse_nested_event_identity() {
        let id = Identity::parse("assets/aaa/events/bbb").unwrap();
        assert_eq!(id.collection(), "assets");
        assert_eq!(id.uuid(), "bbb");
        assert_eq!(id.parent().unwrap().as_str(), "assets/aaa");
    }

    #[test]
    fn reject_malformed() {
        for bad in ["", "subjects", "subjects/", "/abc", "assets/a/events", "a//b/c"] {
            assert!(
                matches!(Identity::parse(bad), Err(TypeError::InvalidIdentity(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn uuid_segment_must_be_a_uuid_for_as_uuid() {
        let id = Identity::new("subjects", "not-a-uuid").unwrap();
        assert!(matches!(id.as_uuid(), Err(TypeError::InvalidUuid(_))));
    }

    #[test]
    fn serde_is_a_plain_string() {
        let id = Identity::parse(SUBJECT).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{SUBJECT}\""));
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_malformed() {
        assert!(serde_json::from_str::<Identity>("\"subjects\"").is_err());
    }

    proptest! {
        #[test]
        fn any_label_uuid_pair_parses(label in "[a-z_]{1,16}", uuid in any::<u128>()) {
            let uuid = uuid::Uuid::from_u128(uuid).to_string();
            let id = Identity::new(&label, &uuid).unwrap();
            prop_assert_eq!(id.collection(), label.as_str());
            prop_assert_eq!(id.uuid(), uuid.as_str());
        }
    }
}
