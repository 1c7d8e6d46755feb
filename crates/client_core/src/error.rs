use shared::error::ProtocolError;
use thiserror::Error;

/// Failure of a backend round trip. Never fatal: the action that issued the
/// request simply does not take effect.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed backend response: {0}")]
    Protocol(#[from] ProtocolError),
}
