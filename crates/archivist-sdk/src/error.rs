use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("archivist error: {0}")]
    Protocol(#[from] archivist_protocol::ProtocolError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("type error: {0}")]
    Type(#[from] archivist_types::TypeError),

    #[error("credentials error: {0}")]
    Credentials(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("response header {0:?} missing")]
    MissingHeader(&'static str),

    #[error("response header {name:?} has invalid value {value:?}")]
    InvalidHeader { name: &'static str, value: String },

    #[error("no {0} match the filter")]
    NotFound(String),

    #[error("{count} {label} match the filter, expected exactly one")]
    Duplicate { label: String, count: usize },

    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("{identity} failed confirmation")]
    ConfirmationFailed { identity: String },

    #[error("{identity} not confirmed after {waited_secs}s (last status {status})")]
    ConfirmationTimeout {
        identity: String,
        status: String,
        waited_secs: u64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    /// HTTP status reported by the Archivist, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol(e) => e.status(),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
