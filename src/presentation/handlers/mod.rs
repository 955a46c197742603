mod error_response;
mod health;
mod transcribe;
mod translate;

pub use error_response::ErrorResponse;
pub use health::{LIVENESS_MESSAGE, health_handler, root_handler};
pub use transcribe::{
    MALFORMED_UPLOAD, TRANSCRIPTION_FAILED, TranscriptionResponse, UPLOAD_TOO_LARGE,
    transcribe_handler,
};
pub use translate::{TRANSLATION_FAILED, TranslateRequest, TranslateResponse, translate_handler};
