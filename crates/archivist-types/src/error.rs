use thiserror::Error;

/// Errors produced while parsing resource types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid identity: {0:?}")]
    InvalidIdentity(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(String),

    #[error("unknown storage integrity: {0:?} (expected LEDGER or TENANT_STORAGE)")]
    UnknownStorageIntegrity(String),
}
