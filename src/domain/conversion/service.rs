use super::dto::{ConversionRequest, ConversionResult, DocumentPreview, PagePreview};
use super::error::ConversionError;
use crate::domain::document::{select_range, Document, DocumentError, ExtractedText};
use crate::domain::tts::{LanguageCatalog, TtsServiceApi};
use crate::infrastructure::extractors;
use std::sync::Arc;

/// Runs the narration pipeline for one document at a time:
/// extraction, page selection, language resolution and synthesis.
/// Holds nothing between calls except read-only collaborators.
pub struct ConversionService {
    tts_service: Arc<dyn TtsServiceApi>,
    catalog: Arc<LanguageCatalog>,
}

impl ConversionService {
    pub fn new(tts_service: Arc<dyn TtsServiceApi>, catalog: Arc<LanguageCatalog>) -> Self {
        Self {
            tts_service,
            catalog,
        }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let ConversionRequest {
            document,
            range,
            language,
        } = request;

        let language = self.catalog.resolve(&language)?;
        let kind = document.kind();

        tracing::info!(
            filename = %document.filename(),
            kind = %kind,
            size_bytes = document.bytes().len(),
            range = %range,
            language = %language,
            "Conversion requested"
        );

        let extracted = extract_off_runtime(document).await?;
        let page_count = extracted.page_count();

        let (text, pages) = match extracted {
            ExtractedText::Paged(pages) => {
                let (text, effective) = select_range(&pages, range)?;
                (text, Some(effective))
            }
            ExtractedText::Flat(text) => (text, None),
        };

        let audio = self
            .tts_service
            .synthesize(&text, language)
            .await
            .map_err(|e| ConversionError::from_synthesis(e, kind))?;

        let char_count = text.chars().count();
        tracing::info!(
            kind = %kind,
            char_count = char_count,
            page_count = ?page_count,
            pages_read = ?pages.map(|range| range.len()),
            audio_size_bytes = audio.len(),
            "Conversion completed"
        );

        Ok(ConversionResult {
            audio,
            language,
            kind,
            char_count,
            page_count,
            pages,
        })
    }

    /// Text shown next to the controls before converting. For PDFs this is the
    /// requested page and the one after it, when there is one.
    pub async fn preview(
        &self,
        document: Document,
        page: usize,
    ) -> Result<DocumentPreview, ConversionError> {
        let filename = document.filename().to_string();
        let kind = document.kind();

        match extract_off_runtime(document).await? {
            ExtractedText::Paged(pages) => {
                if pages.is_empty() {
                    return Err(DocumentError::NoPages.into());
                }
                let page_count = pages.page_count();
                if page == 0 || page > page_count {
                    return Err(DocumentError::PageOutOfRange { page, page_count }.into());
                }

                let spread = (page..=(page + 1).min(page_count))
                    .filter_map(|number| {
                        pages.page(number).map(|text| PagePreview {
                            number,
                            text: text.to_string(),
                        })
                    })
                    .collect();

                Ok(DocumentPreview {
                    filename,
                    kind,
                    page_count: Some(page_count),
                    pages: spread,
                    text: None,
                })
            }
            ExtractedText::Flat(text) => Ok(DocumentPreview {
                filename,
                kind,
                page_count: None,
                pages: Vec::new(),
                text: Some(text),
            }),
        }
    }
}

/// Extraction parses whole files; keep it off the async workers
async fn extract_off_runtime(document: Document) -> Result<ExtractedText, ConversionError> {
    tokio::task::spawn_blocking(move || extractors::extract(&document))
        .await
        .map_err(|e| ConversionError::Internal(e.to_string()))?
        .map_err(ConversionError::from)
}
