//! Failure taxonomy for server round trips.
//!
//! The engine treats the variants very differently: `Rejected` is a normal
//! gameplay outcome shown inline, `Unauthorized` ends the session, and the
//! rest leave the previous snapshot on screen with a status notice.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Session cookie missing or stale. Not recoverable in-client.
    #[error("not signed in or session expired")]
    Unauthorized,

    /// The server understood the intent and refused it.
    #[error("{message}")]
    Rejected { message: String },

    #[error("unexpected http status {status}")]
    Http { status: u16 },

    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("malformed server payload")]
    Decode(#[from] serde_json::Error),
}
