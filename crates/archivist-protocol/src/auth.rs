use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How the client proves who it is to the Archivist.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMethod {
    /// `Authorization: Bearer <token>` on every request.
    Bearer(String),
    /// TLS client certificate; the PEM key and certificate are presented
    /// during the handshake.
    MutualTls { cert_path: PathBuf, key_path: PathBuf },
}

impl AuthMethod {
    /// Client certificate named `name`: `<name>.pem` and `<name>.key` in the
    /// current directory.
    pub fn from_cert_name(name: &str) -> Self {
        Self::MutualTls {
            cert_path: PathBuf::from(format!("{name}.pem")),
            key_path: PathBuf::from(format!("{name}.key")),
        }
    }

    /// Value of the `Authorization` header, if this method uses one.
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Self::Bearer(token) => Some(format!("Bearer {token}")),
            Self::MutualTls { .. } => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bearer(_) => "bearer-token",
            Self::MutualTls { .. } => "mutual-tls",
        }
    }
}

impl fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Self::MutualTls { cert_path, key_path } => f
                .debug_struct("MutualTls")
                .field("cert_path", cert_path)
                .field("key_path", key_path)
                .finish(),
        }
    }
}
