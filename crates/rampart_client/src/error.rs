//! # Client Error Types
//!
//! Failures at the client's edges: decoding, encoding, configuration and the
//! outbound queue. Game-level oddities (late responses, despawns, unknown
//! ids) are state, not errors, and never show up here.

use thiserror::Error;

/// Errors raised by the client driver.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Inbound text is not a valid server message.
    #[error("malformed server message: {0}")]
    Decode(#[source] serde_json::Error),

    /// An outbound message could not be serialized.
    #[error("failed to encode client message: {0}")]
    Encode(#[source] serde_json::Error),

    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The outbound queue is at capacity.
    #[error("outbound queue full: capacity {capacity}")]
    OutboundFull {
        /// Queue capacity.
        capacity: usize,
    },

    /// The transport side of the outbound queue is gone.
    #[error("outbound queue closed")]
    OutboundClosed,
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
