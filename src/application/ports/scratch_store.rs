use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::ArtifactId;

/// Owned byte stream read back from scratch storage.
pub type ArtifactStream = BoxStream<'static, Result<Bytes, io::Error>>;

/// Transient storage for uploaded audio, keyed by generated artifact ids.
#[async_trait::async_trait]
pub trait ScratchStore: Send + Sync {
    /// Writes the stream under `id` and returns the number of bytes stored.
    async fn store(
        &self,
        id: &ArtifactId,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ScratchStoreError>;

    async fn open(&self, id: &ArtifactId) -> Result<ArtifactStream, ScratchStoreError>;

    async fn delete(&self, id: &ArtifactId) -> Result<(), ScratchStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
