use reqwest::Method;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum TinderError {
    /// Client is misconfigured (missing credential, bad proxy, runtime setup).
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Request descriptor uses a method outside GET/POST/PUT/DELETE.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),
    /// Transport-level failure that persisted through every attempt.
    #[error("request failed after {attempts} attempts: {source}")]
    RequestFailed {
        /// Total number of attempts made, including the first one.
        attempts: usize,
        /// Failure observed on the final attempt.
        #[source]
        source: TransportError,
    },
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response body or extracted field did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// Asset URL is not an absolute http(s) URL.
    #[error("invalid url '{0}'")]
    InvalidUrl(String),
}

impl TinderError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The resource (usually a photo) no longer exists.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The server refused access, e.g. an expired signed photo URL.
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Returns `true` for failures a later retry could plausibly resolve.
    ///
    /// A call that already surfaced one of these has exhausted its own
    /// retry budget; callers may still decide to try the batch again later.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RequestFailed { .. } => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Configuration(_)
            | Self::UnsupportedMethod(_)
            | Self::Decode(_)
            | Self::InvalidUrl(_) => false,
        }
    }
}

/// Failure raised by a [`Transport`](crate::Transport) before any HTTP status
/// was received. Every variant is treated as transient by the executor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("transport error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Other(err.to_string())
        }
    }
}
