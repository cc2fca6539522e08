use axum::{
    body::Body,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    domain::{
        conversion::{ConversionRequest, ConversionService, DocumentPreview},
        document::{Document, PageRange},
        tts::{AUDIO_FILE_NAME, AUDIO_MIME_TYPE},
    },
    error::{AppError, AppResult},
};

pub const X_CHARACTER_COUNT: &str = "x-character-count";
pub const X_LANGUAGE: &str = "x-language";
pub const X_PAGE_COUNT: &str = "x-page-count";

pub struct ConversionController {
    conversion_service: Arc<ConversionService>,
}

impl ConversionController {
    pub fn new(conversion_service: Arc<ConversionService>) -> Self {
        Self { conversion_service }
    }

    /// POST /api/convert - Narrate the selected pages of an uploaded document
    pub async fn convert(
        State(controller): State<Arc<ConversionController>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let mut form = UploadForm::read(multipart).await?;

        // The range is checked for every kind, before the document is touched
        let start = form.page_field("start_page")?.unwrap_or(1);
        let end = form.page_field("end_page")?.unwrap_or(start);
        let range = PageRange::new(start, end)?;

        let document = form.take_document()?;
        let language = match form.text_field("language") {
            Some(label) => label.to_string(),
            None => controller
                .conversion_service
                .catalog()
                .default_label()
                .unwrap_or_default()
                .to_string(),
        };

        let result = controller
            .conversion_service
            .convert(ConversionRequest {
                document,
                range,
                language,
            })
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_MIME_TYPE));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&format!("attachment; filename=\"{}\"", AUDIO_FILE_NAME))
                .map_err(|e| AppError::Internal(e.to_string()))?,
        );
        headers.insert(X_CHARACTER_COUNT, HeaderValue::from(result.char_count));
        headers.insert(X_LANGUAGE, HeaderValue::from_static(result.language.as_str()));
        if let Some(page_count) = result.page_count {
            headers.insert(X_PAGE_COUNT, HeaderValue::from(page_count));
        }

        Ok((StatusCode::OK, headers, Body::from(result.audio.into_bytes())))
    }

    /// POST /api/documents/preview - Text of an uploaded document before converting
    pub async fn preview(
        State(controller): State<Arc<ConversionController>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<Json<DocumentPreview>> {
        let mut form = UploadForm::read(multipart).await?;
        let page = form.page_field("page")?.unwrap_or(1);
        let document = form.take_document()?;

        let preview = controller.conversion_service.preview(document, page).await?;
        Ok(Json(preview))
    }
}

#[derive(Debug)]
struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

/// Fields of an upload form, read fully into memory
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    async fn read(multipart: Result<Multipart, MultipartRejection>) -> AppResult<Self> {
        let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == "file" {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::BadRequest("The uploaded file has no name".to_string()))?;
                let bytes = field.bytes().await.map_err(multipart_error)?;

                tracing::debug!(filename = %filename, size_bytes = bytes.len(), "Upload received");
                form.file = Some(UploadedFile {
                    filename,
                    bytes: bytes.to_vec(),
                });
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    fn take_document(&mut self) -> AppResult<Document> {
        let file = self
            .file
            .take()
            .ok_or_else(|| AppError::BadRequest("Upload a Document in the 'file' field".to_string()))?;

        Ok(Document::load(file.filename, file.bytes)?)
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn page_field(&self, name: &str) -> AppResult<Option<usize>> {
        self.text_field(name)
            .map(|value| {
                value.parse::<usize>().map_err(|_| {
                    AppError::BadRequest(format!("'{}' must be a positive whole number", name))
                })
            })
            .transpose()
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
