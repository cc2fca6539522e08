use crate::domain::document::{DocumentError, DocumentKind};
use crate::domain::tts::{LanguageError, SynthesisError};
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Language(#[from] LanguageError),
    #[error("{}", .0.empty_text_message())]
    EmptyText(DocumentKind),
    #[error(transparent)]
    Synthesis(SynthesisError),
    #[error("extraction task failed: {0}")]
    Internal(String),
}

impl ConversionError {
    /// Attach the document kind so an empty-text failure gets the right diagnostic
    pub fn from_synthesis(err: SynthesisError, kind: DocumentKind) -> Self {
        match err {
            SynthesisError::EmptyText => ConversionError::EmptyText(kind),
            other => ConversionError::Synthesis(other),
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Document(e) => AppError::from(e),
            ConversionError::Language(e) => AppError::BadRequest(e.to_string()),
            ConversionError::EmptyText(kind) => {
                AppError::UnprocessableDocument(kind.empty_text_message().to_string())
            }
            ConversionError::Synthesis(e) => AppError::ExternalService(e.to_string()),
            ConversionError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
