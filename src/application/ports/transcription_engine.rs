use async_trait::async_trait;

use super::scratch_store::ArtifactStream;

/// Audio handed to an engine: a stream of known length plus the client's
/// original file metadata.
pub struct AudioSource {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: u64,
    pub stream: ArtifactStream,
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Returns the transcript exactly as the provider produced it.
    async fn transcribe(
        &self,
        audio: AudioSource,
        language: Option<&str>,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream request timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
