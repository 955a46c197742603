use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

use crate::infrastructure::audio::{DEFAULT_BASE_URL, DEFAULT_TRANSCRIPTION_MODEL};
use crate::infrastructure::llm::DEFAULT_CHAT_MODEL;

use super::Environment;

/// Plain variables honoured on top of the `APP_` prefixed ones.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const PORT_VAR: &str = "PORT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub scratch: ScratchSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_upload_mb: 25,
        }
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Not validated here; a missing key shows up as upstream 401s.
    pub api_key: String,
    pub base_url: String,
    pub transcription_model: String,
    pub chat_model: String,
    pub timeout_seconds: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            timeout_seconds: 60,
        }
    }
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScratchSettings {
    pub directory: PathBuf,
}

impl Default for ScratchSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("uploads"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults,
    /// `appsettings.{environment}` (optional), `APP_*` variables with `__`
    /// between sections, then `OPENAI_API_KEY` and `PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("upstream.api_key", std::env::var(API_KEY_VAR).ok())?
            .set_override_option("server.port", std::env::var(PORT_VAR).ok())?
            .build()?
            .try_deserialize()
    }
}
