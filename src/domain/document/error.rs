use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Unsupported file format: '{0}'. Upload a .pdf, .docx or .txt document")]
    UnsupportedFormat(String),

    #[error("The document could not be read: {0}")]
    CorruptDocument(String),

    #[error("The document is not valid {encoding} text: {reason}")]
    Decode {
        encoding: &'static str,
        reason: String,
    },

    #[error("Start Page cannot be greater than end page")]
    InvertedRange { start: usize, end: usize },

    #[error("Page numbers start at 1")]
    PageNumberZero,

    #[error("Invalid page number. Please choose a page between 1 and {page_count}.")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("No pages found in the PDF.")]
    NoPages,
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::UnsupportedFormat(_) => AppError::UnsupportedFormat(err.to_string()),
            DocumentError::CorruptDocument(_) | DocumentError::Decode { .. } | DocumentError::NoPages => {
                AppError::UnprocessableDocument(err.to_string())
            }
            DocumentError::InvertedRange { .. }
            | DocumentError::PageNumberZero
            | DocumentError::PageOutOfRange { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}
