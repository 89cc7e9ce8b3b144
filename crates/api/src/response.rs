//! Shared response payload types for API handlers.
//!
//! Note and tag endpoints return their payloads bare (a note object or a
//! JSON array). Endpoints that only acknowledge an action use
//! [`MessageResponse`].

use serde::{Deserialize, Serialize};

/// Standard `{ "message": "..." }` acknowledgement body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
