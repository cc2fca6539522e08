use crate::domain::document::{Document, DocumentKind, PageRange};
use crate::domain::tts::{AudioBuffer, LanguageCode};
use serde::Serialize;

/// One press of "Convert": a document, the pages to read and the language label
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub document: Document,
    pub range: PageRange,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub audio: AudioBuffer,
    pub language: LanguageCode,
    pub kind: DocumentKind,
    pub char_count: usize,
    /// Page count and effective (clamped) range, for PDFs only
    pub page_count: Option<usize>,
    pub pages: Option<PageRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagePreview {
    pub number: usize,
    pub text: String,
}

/// What the preview panel shows for an uploaded document: a two-page spread for
/// PDFs, the whole body for DOCX and text files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentPreview {
    pub filename: String,
    pub kind: DocumentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PagePreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
