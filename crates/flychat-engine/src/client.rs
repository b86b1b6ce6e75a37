//! HTTP client for the chat endpoint.

use crate::chat::ChatError;
use crate::protocol::{ChatReply, ChatRequest};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Something that can answer a chat message.
///
/// The UI only talks to this trait, so tests can substitute a scripted
/// backend for the HTTP client.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one message and return the reply text.
    async fn send(&self, message: &str) -> Result<String, ChatError>;
}

/// Posts `{"message"}` to a fixed endpoint and decodes `{"reply"}`.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: Client,
    endpoint: String,
}

impl HttpChatClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        debug!(endpoint = %self.endpoint, len = message.len(), "posting chat message");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(ChatError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(ChatError::Transport)?;
        let reply: ChatReply = serde_json::from_slice(&bytes).map_err(ChatError::Decode)?;

        debug!(len = reply.reply.len(), "received chat reply");
        Ok(reply.reply)
    }
}
