//! flychat-engine: Headless core for the flychat widget
//!
//! This crate provides the UI-independent parts of flychat, including:
//! - Conversation state (history of message pairs plus the draft)
//! - The JSON wire protocol shared with the backend
//! - An HTTP chat client and the [`ChatBackend`] seam used by the UI
//! - Client configuration

pub mod chat;
pub mod client;
pub mod config;
pub mod protocol;

// Re-export commonly used types
pub use chat::{ChatError, Conversation, MessagePair};
pub use client::{ChatBackend, HttpChatClient};
pub use config::{ClientConfig, ConfigError};
pub use protocol::{ChatReply, ChatRequest, ErrorBody, DEFAULT_ENDPOINT};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
