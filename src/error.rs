//! Error types.
//!
//! Every failure is returned to the immediate caller. This crate never logs,
//! retries, or suppresses errors internally.

use std::io;

/// Errors returned by the handshake negotiator.
///
/// Every variant is terminal for the request: the caller must not retry with
/// the same request object.
#[derive(Debug, thiserror::Error)]
pub enum HandshakeError {
    /// The `Upgrade` header is missing or not `websocket`. Nothing was
    /// written to the response.
    #[error("Not a websocket upgrade request")]
    NotWebSocket,
    /// The `Sec-WebSocket-Key` header is missing or empty. A `400` response
    /// was written.
    #[error("Missing Sec-WebSocket-Key header")]
    MissingKey,
    /// The response sink refused to hand over its transport stream. A `500`
    /// response was attempted.
    #[error("Failed to hijack the connection: {0}")]
    Hijack(#[source] io::Error),
    /// Writing the handshake response failed.
    #[error("Write error: {0}")]
    Io(#[from] io::Error),
}

/// Errors returned when reading a frame.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The underlying read failed or ended mid-frame. The stream is assumed
    /// to be desynchronized; the caller should close the connection.
    #[error("Read error: {0}")]
    Io(#[from] io::Error),
    /// The 64-bit extended payload length does not fit in memory on this
    /// host.
    #[error("Payload length too large: {len}")]
    PayloadTooLarge {
        /// The advertised payload length.
        len: u64,
    },
}

/// Errors returned when writing a frame.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The underlying write failed. The frame may have been partially
    /// written; the stream is in an indeterminate state.
    #[error("Write error: {0}")]
    Io(#[from] io::Error),
    /// The payload exceeds the 16-bit length encoding. Nothing was written.
    #[error("Payload length exceeds 65535: {len}")]
    PayloadTooLarge {
        /// The rejected payload length.
        len: usize,
    },
}
