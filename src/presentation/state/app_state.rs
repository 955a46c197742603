use std::sync::Arc;

use crate::application::services::{TranscriptionService, TranslationService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub translation_service: Arc<TranslationService>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(
        transcription_service: Arc<TranscriptionService>,
        translation_service: Arc<TranslationService>,
        settings: Settings,
    ) -> Self {
        Self {
            transcription_service,
            translation_service,
            settings,
        }
    }
}
