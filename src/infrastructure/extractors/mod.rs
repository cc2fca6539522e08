pub mod docx_extractor;
pub mod pdf_extractor;
pub mod text_extractor;

use crate::domain::document::{Document, DocumentError, DocumentKind, ExtractedText};

/// Run the extractor matching the document's kind
pub fn extract(document: &Document) -> Result<ExtractedText, DocumentError> {
    match document.kind() {
        DocumentKind::Pdf => pdf_extractor::extract_pages(document.bytes()).map(ExtractedText::Paged),
        DocumentKind::Docx => {
            docx_extractor::extract_paragraphs(document.bytes()).map(ExtractedText::Flat)
        }
        DocumentKind::Text => text_extractor::decode_utf8(document.bytes()).map(ExtractedText::Flat),
    }
}
