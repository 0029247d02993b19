use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    /// Connection refused, timed out, TLS failure. Never retried.
    #[error("controller down or not responding: {0}")]
    Transport(reqwest::Error),

    /// The token endpoint answered with an `error` field.
    #[error("controller rejected the credentials: {body}")]
    AuthenticationRejected { body: String },

    #[error("no auth token held, authenticate first")]
    NotAuthenticated,

    #[error("unexpected response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    /// Only produced when a retry cap is configured.
    #[error("still rate limited after {attempts} attempts: {url}")]
    RateLimited { url: String, attempts: u32 },
}

impl Error {
    pub(crate) fn malformed(url: &str, reason: impl std::fmt::Display) -> Self {
        Self::MalformedResponse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the controller could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
