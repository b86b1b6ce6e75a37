//! Conversation state for the chat widget.
//!
//! A [`Conversation`] owns the ordered history of completed exchanges and
//! the current draft. Sending is split in two halves so a UI can run the
//! network call on another task: [`Conversation::outgoing`] captures the
//! draft, and [`Conversation::record_reply`] applies the result once the
//! backend answers. [`Conversation::send`] does both for sequential callers.

use crate::client::ChatBackend;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One completed exchange. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePair {
    /// What the user sent.
    pub user: String,
    /// What the backend replied.
    pub bot: String,
}

impl MessagePair {
    /// Create a new message pair.
    pub fn new(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            bot: bot.into(),
        }
    }
}

/// History plus draft, owned by a single widget for its lifetime.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    history: Vec<MessagePair>,
    draft: String,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed exchanges, oldest first.
    pub fn history(&self) -> &[MessagePair] {
        &self.history
    }

    /// The unsent input text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft. No validation.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// The text a send would carry, or `None` when the draft is blank.
    pub fn outgoing(&self) -> Option<String> {
        if self.draft.trim().is_empty() {
            None
        } else {
            Some(self.draft.clone())
        }
    }

    /// Append a completed exchange and clear the draft.
    pub fn record_reply(&mut self, user: impl Into<String>, bot: impl Into<String>) -> &MessagePair {
        self.history.push(MessagePair::new(user, bot));
        self.draft.clear();
        &self.history[self.history.len() - 1]
    }

    /// Send the draft through `backend` and record the reply.
    ///
    /// Returns `Ok(None)` without contacting the backend when the draft is
    /// blank. On error the conversation is left untouched.
    pub async fn send<B>(&mut self, backend: &B) -> Result<Option<&MessagePair>, ChatError>
    where
        B: ChatBackend + ?Sized,
    {
        let Some(message) = self.outgoing() else {
            debug!("ignoring send of blank draft");
            return Ok(None);
        };

        let reply = backend.send(&message).await?;
        Ok(Some(self.record_reply(message, reply)))
    }
}

/// Errors that can occur while exchanging a message with the backend.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The request could not be sent or the response body not read.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body was not a `{"reply": ...}` object.
    #[error("Malformed reply: {0}")]
    Decode(#[source] serde_json::Error),
}
