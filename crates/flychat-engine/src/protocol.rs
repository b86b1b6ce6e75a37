//! Wire protocol between the chat widget and its backend.
//!
//! A single request/response exchange:
//!
//! ```text
//! POST /chat   Content-Type: application/json
//! {"message": "<draft text>"}
//!
//! 200 OK
//! {"reply": "<bot text>"}
//! ```
//!
//! Non-success responses carry an [`ErrorBody`].

use serde::{Deserialize, Serialize};

/// Endpoint the widget posts to when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/chat";

/// Request body sent for every send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The draft text being sent.
    pub message: String,
}

impl ChatRequest {
    /// Create a request for the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The bot's answer.
    pub reply: String,
}

/// Error response body returned with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g. `validation_error`).
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}
