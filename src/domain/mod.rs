mod artifact_id;
mod chat_message;
mod message_role;
mod target_language;

pub use artifact_id::ArtifactId;
pub use chat_message::ChatMessage;
pub use message_role::MessageRole;
pub use target_language::TargetLanguage;
