/// Error types for PayAgency client operations.
///
/// The taxonomy is deliberately closed: every failure a caller can observe
/// is one of these three kinds, so error handling can branch exhaustively.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid key material or client configuration. Raised synchronously at
    /// construction; the client is never created in a half-configured state.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// The remote service answered with an error status, or returned a body
    /// that could not be read as JSON.
    #[error("API error ({status_code}): {message}")]
    Api {
        message: String,
        /// HTTP status code of the response.
        status_code: u16,
        /// Best-effort parsed response body, or a fallback document built
        /// from the raw text.
        raw: Option<serde_json::Value>,
    },

    /// The request never received a valid HTTP response (DNS, connect,
    /// timeout, TLS). Carries no status code and no body.
    #[error("{message}")]
    Network {
        message: String,
    },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    pub(crate) fn network(details: impl std::fmt::Display) -> Self {
        Error::Network {
            message: format!("Network error: {details}"),
        }
    }

    /// Status code of an API error, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// A specialized `Result` type for PayAgency client operations.
pub type Result<T> = std::result::Result<T, Error>;
