mod transcription_service;
mod translation_service;
mod upload_artifact;

pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
pub use translation_service::{TranslationService, TranslationServiceError, build_messages};
pub use upload_artifact::UploadArtifact;
