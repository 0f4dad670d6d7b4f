// src/error.rs
use thiserror::Error;

/// Ways the outbound completion call can fail. The /chat handler collapses
/// all of these into the same fallback payload; keeping them separate lets
/// tests and logs tell a dead network apart from a broken reply.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to reach completion provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("completion provider returned status {0}")]
    Provider(reqwest::StatusCode),

    #[error("unexpected completion payload: {0}")]
    MalformedReply(String),
}
