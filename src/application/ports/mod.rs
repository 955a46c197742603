mod chat_client;
mod scratch_store;
mod transcription_engine;

pub use chat_client::{ChatClient, ChatClientError};
pub use scratch_store::{ArtifactStream, ScratchStore, ScratchStoreError};
pub use transcription_engine::{AudioSource, TranscriptionEngine, TranscriptionError};
