use crate::domain::document::{DocumentError, PageCollection};

/// Open a PDF from memory and extract the plain text of every page, in page order.
///
/// Pages without extractable text (scanned images, blank pages) come back as empty
/// strings so the collection always has one entry per page.
pub fn extract_pages(bytes: &[u8]) -> Result<PageCollection, DocumentError> {
    let document = lopdf::Document::load_mem(bytes)
        .map_err(|error| DocumentError::CorruptDocument(format!("failed reading pdf: {error}")))?;

    let pages = document.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    for page_number in pages.keys() {
        texts.push(extract_page(&document, *page_number));
    }

    tracing::debug!(page_count = texts.len(), "PDF text extraction complete");
    Ok(PageCollection::new(texts))
}

fn extract_page(document: &lopdf::Document, page_number: u32) -> String {
    match document.extract_text(&[page_number]) {
        // The text operators end every text object with a line break
        Ok(text) => text.trim_end_matches(['\r', '\n']).to_string(),
        Err(error) => {
            tracing::warn!(
                page = page_number,
                error = %error,
                "Failed to extract text from PDF page, treating it as empty"
            );
            String::new()
        }
    }
}
