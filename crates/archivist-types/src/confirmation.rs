use std::fmt;

use serde::{Deserialize, Serialize};

/// Progress of a resource towards being committed by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    Pending,
    Confirmed,
    Failed,
    Unequivocal,
    /// Absent, or a status this client does not know.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ConfirmationStatus {
    /// Returns `true` once the service will not change the resource's
    /// committed state any further.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Unequivocal)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for ConfirmationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Unequivocal => write!(f, "UNEQUIVOCAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
