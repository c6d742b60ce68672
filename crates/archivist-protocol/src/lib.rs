//! Wire definitions for the Archivist REST API.
//!
//! Endpoint paths, authentication methods, list-page decoding, query
//! flattening and the mapping from HTTP status to typed errors. Nothing in
//! this crate performs I/O.

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod page;
pub mod query;

pub use auth::AuthMethod;
pub use endpoint::{endpoints, headers, params, root_url, AccessToken, DEFAULT_PAGE_SIZE, DEFAULT_URL};
pub use error::{ProtocolError, ProtocolResult};
pub use page::Page;
pub use query::{flatten, QueryParams};
