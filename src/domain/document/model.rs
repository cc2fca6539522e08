use super::error::DocumentError;
use super::format::{detect_kind, DocumentKind};

/// An uploaded file together with its detected kind. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Document {
    filename: String,
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl Document {
    /// Detect the kind from the filename and take ownership of the bytes.
    /// Fails with `UnsupportedFormat` before any content is looked at.
    pub fn load(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DocumentError> {
        let filename = filename.into();
        let kind = detect_kind(&filename)?;

        Ok(Self {
            filename,
            kind,
            bytes,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Page texts of a PDF in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCollection {
    pages: Vec<String>,
}

impl PageCollection {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Text of a page by its 1-based number
    pub fn page(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .map(String::as_str)
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }
}

impl FromIterator<String> for PageCollection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Result of running a document through its extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    Paged(PageCollection),
    Flat(String),
}

impl ExtractedText {
    pub fn page_count(&self) -> Option<usize> {
        match self {
            ExtractedText::Paged(pages) => Some(pages.page_count()),
            ExtractedText::Flat(_) => None,
        }
    }
}
