use super::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document formats accepted for narration, resolved once from the upload's filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Text => "text",
        }
    }

    /// Map a file extension (without the dot, any case) to a document kind
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Text),
            _ => None,
        }
    }

    /// Only PDFs carry page structure; the other kinds extract to a single body
    pub fn is_paged(&self) -> bool {
        matches!(self, DocumentKind::Pdf)
    }

    /// User-facing diagnostic for a document with nothing to narrate
    pub fn empty_text_message(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "The PDF does not seem to have text and maybe it's scanned",
            DocumentKind::Docx | DocumentKind::Text => "The document does not seem to have text.",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify an uploaded file by its extension. Content is never sniffed.
pub fn detect_kind(filename: &str) -> Result<DocumentKind, DocumentError> {
    Path::new(filename)
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(DocumentKind::from_extension)
        .ok_or_else(|| DocumentError::UnsupportedFormat(filename.to_string()))
}
