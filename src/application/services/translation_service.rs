use std::sync::Arc;

use crate::application::ports::{ChatClient, ChatClientError};
use crate::domain::{ChatMessage, TargetLanguage};
use crate::infrastructure::observability::preview_text;

pub struct TranslationService {
    chat_client: Arc<dyn ChatClient>,
}

impl TranslationService {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationServiceError> {
        let target = TargetLanguage::from_code(target_language);
        let messages = build_messages(text, &target);

        tracing::debug!(
            target = %target,
            text = %preview_text(text),
            "Forwarding text for translation"
        );

        let completion = self.chat_client.complete(&messages).await?;
        let translation = completion.trim().to_string();

        tracing::info!(
            target = %target,
            chars = translation.chars().count(),
            "Translation completed"
        );

        Ok(translation)
    }
}

/// System instruction naming the target language, then the source text as
/// the user turn.
pub fn build_messages(text: &str, target: &TargetLanguage) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(target.system_instruction()),
        ChatMessage::user(text),
    ]
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("completion: {0}")]
    Completion(#[from] ChatClientError),
}
