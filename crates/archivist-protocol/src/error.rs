use thiserror::Error;

/// Failures reported by the Archivist, or responses that do not have the
/// expected shape. Status variants carry the response body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("too many requests: {0}")]
    TooManyRequests(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("response is missing field {0:?}")]
    MissingField(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ProtocolError {
    /// Map a response status to an error. Returns `None` below 400.
    pub fn from_status(status: u16, body: String) -> Option<Self> {
        (status >= 400).then(|| Self::for_failure(status, body))
    }

    /// Map a status already known to be a failure (>= 400).
    pub fn for_failure(status: u16, body: String) -> Self {
        match status {
            400 => Self::BadRequest(body),
            401 => Self::Unauthenticated(body),
            403 => Self::PermissionDenied(body),
            404 => Self::NotFound(body),
            429 => Self::TooManyRequests(body),
            501 => Self::NotImplemented(body),
            503 => Self::Unavailable(body),
            _ => Self::Http { status, body },
        }
    }

    /// HTTP status this error was produced from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthenticated(_) => Some(401),
            Self::PermissionDenied(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::TooManyRequests(_) => Some(429),
            Self::NotImplemented(_) => Some(501),
            Self::Unavailable(_) => Some(503),
            Self::Http { status, .. } => Some(*status),
            Self::MissingField(_) | Self::Deserialization(_) => None,
        }
    }
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
