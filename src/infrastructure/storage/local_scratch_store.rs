use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{ArtifactStream, ScratchStore, ScratchStoreError};
use crate::domain::ArtifactId;

/// Scratch directory on the local filesystem. Each artifact is one flat file
/// named after its id.
pub struct LocalScratchStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalScratchStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ScratchStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn location(id: &ArtifactId) -> StorePath {
        StorePath::from(id.to_string())
    }
}

#[async_trait::async_trait]
impl ScratchStore for LocalScratchStore {
    async fn store(
        &self,
        id: &ArtifactId,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ScratchStoreError> {
        let location = Self::location(id);
        let mut upload = self
            .inner
            .put_multipart(&location)
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(ScratchStoreError::Io(e));
                }
            };
            if bytes.is_empty() {
                continue;
            }
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(ScratchStoreError::WriteFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;

        Ok(total_bytes)
    }

    async fn open(&self, id: &ArtifactId) -> Result<ArtifactStream, ScratchStoreError> {
        let result = self
            .inner
            .get(&Self::location(id))
            .await
            .map_err(|e| ScratchStoreError::NotFound(e.to_string()))?;

        Ok(result.into_stream().map_err(io::Error::other).boxed())
    }

    async fn delete(&self, id: &ArtifactId) -> Result<(), ScratchStoreError> {
        self.inner
            .delete(&Self::location(id))
            .await
            .map_err(|e| ScratchStoreError::DeleteFailed(e.to_string()))
    }
}
