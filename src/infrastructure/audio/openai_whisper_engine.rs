use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{AudioSource, TranscriptionEngine, TranscriptionError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::Transport(format!("client: {}", e)))?;
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/audio/transcriptions", base_url.trim_end_matches('/')),
            model: model.unwrap_or_else(|| DEFAULT_TRANSCRIPTION_MODEL.to_string()),
        })
    }
}

fn transport_error(e: reqwest::Error) -> TranscriptionError {
    if e.is_timeout() {
        TranscriptionError::Timeout
    } else {
        TranscriptionError::Transport(e.to_string())
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio: AudioSource,
        language: Option<&str>,
    ) -> Result<String, TranscriptionError> {
        let body = reqwest::Body::wrap_stream(audio.stream);
        let mut file_part =
            multipart::Part::stream_with_length(body, audio.size_bytes).file_name(audio.file_name);
        if let Some(content_type) = audio.content_type.as_deref() {
            file_part = file_part
                .mime_str(content_type)
                .map_err(|e| TranscriptionError::InvalidRequest(format!("mime: {}", e)))?;
        }

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone());
        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }

        tracing::debug!(
            model = %self.model,
            bytes = audio.size_bytes,
            "Sending audio to OpenAI Whisper API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            chars = result.text.chars().count(),
            "OpenAI Whisper transcription completed"
        );

        Ok(result.text)
    }
}
