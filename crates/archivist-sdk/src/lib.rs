//! Async client for the Archivist ledger service.
//!
//! [`Archivist`] owns the HTTP connection and authentication; resource
//! operations live on the handles it hands out:
//!
//! ```no_run
//! # async fn demo() -> archivist_sdk::SdkResult<()> {
//! use archivist_sdk::{Archivist, AuthMethod, ClientConfig};
//!
//! let arch = Archivist::new(
//!     ClientConfig::default().with_url("https://archivist.example"),
//!     AuthMethod::Bearer("token".into()),
//! )?;
//! let subject = arch.subjects().create("Supplier", vec![], vec![]).await?;
//! println!("{} subjects", arch.subjects().count(None).await?);
//! arch.subjects().delete(&subject.identity).await?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod client;
pub mod config;
pub mod confirm;
pub mod credentials;
pub mod error;
pub mod events;
pub mod filter;
pub mod locations;
pub mod subjects;

pub use assets::Assets;
pub use client::Archivist;
pub use config::{AssetFixtures, ClientConfig, ConfirmConfig, Fixtures};
pub use credentials::{client_credentials_token, read_token_file, CredentialSources};
pub use error::{SdkError, SdkResult};
pub use events::Events;
pub use filter::Filter;
pub use locations::Locations;
pub use subjects::Subjects;

// Re-export key types
pub use archivist_protocol::{AuthMethod, ProtocolError};
pub use archivist_types::{
    Asset, Attributes, ConfirmationStatus, Event, Identity, Location, NewAsset, NewEvent,
    NewLocation, NewSubject, Principal, StorageIntegrity, Subject, SubjectUpdate,
};
