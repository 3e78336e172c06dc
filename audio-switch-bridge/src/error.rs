//! Bridge error types.

use thiserror::Error;

/// Errors raised while talking to the host service.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Failed to connect to host at {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Host connection I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode frame: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode frame: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Host returned an error: {0}")]
    Host(String),

    #[error("Host connection closed")]
    Disconnected,

    #[error("Unexpected response for {method}")]
    UnexpectedResponse { method: &'static str },
}
