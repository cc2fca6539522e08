pub mod dto;
pub mod error;
pub mod service;

pub use dto::{ConversionRequest, ConversionResult, DocumentPreview, PagePreview};
pub use error::ConversionError;
pub use service::ConversionService;
