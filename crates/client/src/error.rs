//! Client error types

use thiserror::Error;

/// Message shown when no response reached the client.
pub const CONNECTION_MESSAGE: &str = "Unable to connect to server. Please check your connection.";

/// Client error type
///
/// `Connection` and `Server` are kept apart so the UI can tell "the server
/// is unreachable" from "the server refused".
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received (refused, DNS, TLS, timeout). The
    /// payload is the transport detail, kept for logs only.
    #[error("Unable to connect to server. Please check your connection.")]
    Connection(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A success response whose body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True if the request never reached the server.
    pub fn is_connection(&self) -> bool {
        matches!(self, ClientError::Connection(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
