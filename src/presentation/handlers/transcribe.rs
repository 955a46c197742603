use std::io;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use crate::application::ports::ScratchStoreError;
use crate::application::services::{
    TranscriptionService, TranscriptionServiceError, UploadArtifact,
};
use crate::presentation::state::AppState;

use super::error_response::ErrorResponse;

/// Multipart names accepted for the audio file. Any other field carrying a
/// file name is treated as the audio too.
const AUDIO_FIELDS: [&str; 2] = ["audio", "file"];
const LANGUAGE_FIELD: &str = "language";

pub const TRANSCRIPTION_FAILED: &str = "transcription failed";
pub const MALFORMED_UPLOAD: &str = "malformed multipart body";
pub const UPLOAD_TOO_LARGE: &str = "audio file too large";

/// Caller-facing message for a rejected upload body.
fn rejection_message(status: StatusCode) -> &'static str {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        UPLOAD_TOO_LARGE
    } else {
        MALFORMED_UPLOAD
    }
}

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
enum IntakeError {
    #[error("no audio file uploaded")]
    MissingFile,
    #[error("only one audio file may be uploaded")]
    MultipleFiles,
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Staging(#[from] TranscriptionServiceError),
}

impl IntakeError {
    fn reply(self) -> Response {
        match &self {
            IntakeError::MissingFile | IntakeError::MultipleFiles => {
                tracing::warn!(error = %self, "Rejected transcription upload");
                ErrorResponse::reply(StatusCode::BAD_REQUEST, self.to_string())
            }
            IntakeError::Multipart(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                ErrorResponse::reply(e.status(), rejection_message(e.status()))
            }
            IntakeError::Staging(e) => match upload_rejection(e) {
                Some(rejection) => {
                    tracing::warn!(error = %rejection, "Upload stream aborted");
                    let status = rejection.status();
                    ErrorResponse::reply(status, rejection_message(status))
                }
                None => {
                    tracing::error!(error = %e, "Failed to stage upload");
                    ErrorResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, TRANSCRIPTION_FAILED)
                }
            },
        }
    }
}

/// A staging failure caused by the caller's body (size limit, truncated
/// stream) rather than by local storage.
fn upload_rejection(error: &TranscriptionServiceError) -> Option<&MultipartError> {
    match error {
        TranscriptionServiceError::Staging(ScratchStoreError::Io(io)) => io
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<MultipartError>()),
        _ => None,
    }
}

struct Intake {
    artifact: Option<UploadArtifact>,
    language: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(
                error = %rejection.body_text(),
                "Rejected transcription request body"
            );
            let status = rejection.status();
            return ErrorResponse::reply(status, rejection_message(status));
        }
    };
    let service = state.transcription_service.as_ref();

    let mut intake = Intake {
        artifact: None,
        language: None,
    };
    let outcome = read_fields(service, &mut multipart, &mut intake).await;

    let artifact = match (outcome, intake.artifact) {
        (Ok(()), Some(artifact)) => artifact,
        (Ok(()), None) => return IntakeError::MissingFile.reply(),
        (Err(e), Some(artifact)) => {
            artifact.release().await;
            return e.reply();
        }
        (Err(e), None) => return e.reply(),
    };

    let language = intake
        .language
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    match service.transcribe(artifact, language.as_deref()).await {
        Ok(text) => (StatusCode::OK, Json(TranscriptionResponse { text })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            ErrorResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, TRANSCRIPTION_FAILED)
        }
    }
}

/// Upload intake. Whatever was staged before an error stays in `intake` so
/// the caller can release it.
async fn read_fields(
    service: &TranscriptionService,
    multipart: &mut Multipart,
    intake: &mut Intake,
) -> Result<(), IntakeError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == LANGUAGE_FIELD {
            intake.language = Some(field.text().await?);
            continue;
        }

        if field.file_name().is_none() && !AUDIO_FIELDS.contains(&name.as_str()) {
            tracing::debug!(field = %name, "Ignoring unknown form field");
            continue;
        }

        if intake.artifact.is_some() {
            return Err(IntakeError::MultipleFiles);
        }

        let file_name = field.file_name().unwrap_or("audio").to_string();
        let content_type = field.content_type().map(str::to_string);
        let stream = field.map_err(io::Error::other).boxed();

        intake.artifact = Some(service.stage(file_name, content_type, stream).await?);
    }

    Ok(())
}
