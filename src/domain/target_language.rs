use std::fmt;

/// Language a translation request asks for.
///
/// Only `ku` and `de` have a known name. Any other code is kept as-is and
/// ends up in the upstream instruction literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    Kurdish,
    German,
    Other(String),
}

impl TargetLanguage {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ku" => Self::Kurdish,
            "de" => Self::German,
            other => Self::Other(other.to_string()),
        }
    }

    /// The fragment naming the language inside the system instruction.
    pub fn instruction_name(&self) -> &str {
        match self {
            Self::Kurdish => "Kurdish",
            Self::German => "German",
            Self::Other(code) => code,
        }
    }

    pub fn system_instruction(&self) -> String {
        format!(
            "Translate the following text into {}.",
            self.instruction_name()
        )
    }
}

impl From<&str> for TargetLanguage {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.instruction_name())
    }
}
