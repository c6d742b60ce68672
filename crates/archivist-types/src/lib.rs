//! Resource types for the Archivist client.
//!
//! Plain data mirroring the JSON resources served by the Archivist. All
//! consistency rules live on the service; these types only fix field names
//! and defaults.
//!
//! # Key Types
//!
//! - [`Identity`] — server-assigned resource name (`subjects/<uuid>`)
//! - [`Subject`] — display name plus wallet and tessera public keys
//! - [`Asset`], [`Event`], [`Location`] — tracked things and their history
//! - [`StorageIntegrity`] — ledger vs tenant storage persistence

pub mod asset;
pub mod confirmation;
pub mod error;
pub mod event;
pub mod identity;
pub mod location;
pub mod storage_integrity;
pub mod subject;

pub use asset::{Asset, Attributes, NewAsset};
pub use confirmation::ConfirmationStatus;
pub use error::TypeError;
pub use event::{Event, NewEvent, Principal};
pub use identity::Identity;
pub use location::{Location, NewLocation};
pub use storage_integrity::StorageIntegrity;
pub use subject::{NewSubject, Subject, SubjectUpdate};
