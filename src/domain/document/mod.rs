pub mod error;
pub mod format;
pub mod model;
pub mod range;

pub use error::DocumentError;
pub use format::{detect_kind, DocumentKind};
pub use model::{Document, ExtractedText, PageCollection};
pub use range::{select_range, PageRange};
