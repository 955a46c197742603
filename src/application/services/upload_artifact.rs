use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::application::ports::{AudioSource, ScratchStore, ScratchStoreError};
use crate::domain::ArtifactId;

/// One uploaded audio file held in scratch storage for the lifetime of a
/// single request.
///
/// The file is deleted exactly once: either by [`UploadArtifact::release`],
/// which every normal exit path awaits, or by `Drop` when the owning request
/// is cancelled or panics before releasing it.
pub struct UploadArtifact {
    id: ArtifactId,
    file_name: String,
    content_type: Option<String>,
    size_bytes: u64,
    store: Arc<dyn ScratchStore>,
    released: bool,
}

impl UploadArtifact {
    /// Streams the upload into scratch storage under a freshly generated id.
    pub async fn acquire(
        store: Arc<dyn ScratchStore>,
        file_name: String,
        content_type: Option<String>,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<Self, ScratchStoreError> {
        let id = ArtifactId::new();
        let size_bytes = store.store(&id, stream).await?;

        tracing::debug!(
            artifact_id = %id,
            file_name = %file_name,
            bytes = size_bytes,
            "Upload staged"
        );

        Ok(Self {
            id,
            file_name,
            content_type,
            size_bytes,
            store,
            released: false,
        })
    }

    pub fn id(&self) -> ArtifactId {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Opens the stored bytes as an engine input. The artifact keeps
    /// ownership of the file.
    pub async fn audio_source(&self) -> Result<AudioSource, ScratchStoreError> {
        let stream = self.store.open(&self.id).await?;
        Ok(AudioSource {
            file_name: self.file_name.clone(),
            content_type: self.content_type.clone(),
            size_bytes: self.size_bytes,
            stream,
        })
    }

    /// Deletes the file. A failed delete is logged and otherwise ignored.
    /// If this future is dropped before the delete finishes, `Drop` schedules
    /// it again.
    pub async fn release(mut self) {
        let outcome = self.store.delete(&self.id).await;
        self.released = true;
        match outcome {
            Ok(()) => tracing::debug!(artifact_id = %self.id, "Upload released"),
            Err(e) => {
                tracing::warn!(artifact_id = %self.id, error = %e, "Failed to delete upload")
            }
        }
    }
}

impl Drop for UploadArtifact {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let id = self.id;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let store = Arc::clone(&self.store);
                handle.spawn(async move {
                    if let Err(e) = store.delete(&id).await {
                        tracing::warn!(artifact_id = %id, error = %e, "Failed to delete abandoned upload");
                    }
                });
                tracing::debug!(artifact_id = %id, "Upload abandoned, deletion scheduled");
            }
            Err(_) => {
                tracing::warn!(artifact_id = %id, "Upload dropped outside a runtime, file left behind");
            }
        }
    }
}
