use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Where the Archivist persists an asset and its events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageIntegrity {
    /// Recorded on the ledger.
    Ledger,
    /// Recorded on the tenant's own storage.
    #[default]
    TenantStorage,
}

impl StorageIntegrity {
    /// Every variant, in code order.
    pub const ALL: [StorageIntegrity; 2] = [Self::Ledger, Self::TenantStorage];

    /// The wire name, e.g. `TENANT_STORAGE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ledger => "LEDGER",
            Self::TenantStorage => "TENANT_STORAGE",
        }
    }

    /// Numeric code used by the service's enum.
    pub fn code(&self) -> u8 {
        match self {
            Self::Ledger => 1,
            Self::TenantStorage => 2,
        }
    }
}

impl FromStr for StorageIntegrity {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| TypeError::UnknownStorageIntegrity(s.to_string()))
    }
}

impl fmt::Display for StorageIntegrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
