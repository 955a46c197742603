use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::application::ports::{
    ScratchStore, ScratchStoreError, TranscriptionEngine, TranscriptionError,
};

use super::upload_artifact::UploadArtifact;

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    store: Arc<dyn ScratchStore>,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>, store: Arc<dyn ScratchStore>) -> Self {
        Self { engine, store }
    }

    /// Upload intake: writes the incoming file to scratch storage.
    pub async fn stage(
        &self,
        file_name: String,
        content_type: Option<String>,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<UploadArtifact, TranscriptionServiceError> {
        UploadArtifact::acquire(Arc::clone(&self.store), file_name, content_type, stream)
            .await
            .map_err(TranscriptionServiceError::Staging)
    }

    /// Forwards the artifact upstream and releases it before returning,
    /// whatever the outcome.
    pub async fn transcribe(
        &self,
        artifact: UploadArtifact,
        language: Option<&str>,
    ) -> Result<String, TranscriptionServiceError> {
        let result = self.forward(&artifact, language).await;
        artifact.release().await;
        result
    }

    async fn forward(
        &self,
        artifact: &UploadArtifact,
        language: Option<&str>,
    ) -> Result<String, TranscriptionServiceError> {
        let audio = artifact
            .audio_source()
            .await
            .map_err(TranscriptionServiceError::Staging)?;

        tracing::debug!(
            artifact_id = %artifact.id(),
            bytes = artifact.size_bytes(),
            language = language.unwrap_or("auto"),
            "Forwarding audio for transcription"
        );

        let text = self.engine.transcribe(audio, language).await?;

        tracing::info!(
            artifact_id = %artifact.id(),
            chars = text.chars().count(),
            "Transcription completed"
        );

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("staging: {0}")]
    Staging(ScratchStoreError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}
