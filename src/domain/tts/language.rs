use super::error::LanguageError;
use serde::{Deserialize, Serialize};

/// ISO 639-1 language codes the narration providers are asked to speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [
        LanguageCode::English,
        LanguageCode::Spanish,
        LanguageCode::French,
    ];

    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
        }
    }

    /// Human-readable label shown in the language selector
    pub fn label(&self) -> &'static str {
        match self {
            LanguageCode::English => "English",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::French => "French",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageEntry {
    pub label: String,
    pub code: LanguageCode,
}

/// Fixed label → code mapping used to resolve the user's language selection.
///
/// Built once at startup and shared read-only. Labels are unique: when the same
/// label is given twice the first entry wins.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

impl LanguageCatalog {
    pub fn new<L: Into<String>>(entries: impl IntoIterator<Item = (L, LanguageCode)>) -> Self {
        let mut unique: Vec<LanguageEntry> = Vec::new();
        for (label, code) in entries {
            let label = label.into();
            if unique.iter().any(|entry| entry.label == label) {
                tracing::warn!(label = %label, "Duplicate language label ignored");
                continue;
            }
            unique.push(LanguageEntry { label, code });
        }

        Self { entries: unique }
    }

    pub fn resolve(&self, label: &str) -> Result<LanguageCode, LanguageError> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.code)
            .ok_or_else(|| LanguageError::Unknown(label.to_string()))
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Label preselected in the language selector
    pub fn default_label(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.label.as_str())
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new(LanguageCode::ALL.iter().map(|code| (code.label(), *code)))
    }
}
