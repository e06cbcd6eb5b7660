use std::time::Duration;
use thiserror::Error;

/// Represents the ways a single HTTP exchange can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server could not be reached (DNS, refused connection, TLS, ...).
    #[error("Connection error: {0}")]
    Connect(String),

    /// No complete response arrived within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with something other than `200 OK`.
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
