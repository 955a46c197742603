use async_trait::async_trait;

use crate::domain::ChatMessage;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the ordered messages and returns the first choice's content
    /// untouched.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream request timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
