use super::error::DocumentError;
use super::model::PageCollection;

/// A 1-based inclusive page range. `start <= end` holds for every constructed value,
/// so an inverted range is rejected before any page is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: usize,
    end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Result<Self, DocumentError> {
        if start == 0 {
            return Err(DocumentError::PageNumberZero);
        }
        if start > end {
            return Err(DocumentError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of pages covered; never zero
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Fit the range to a document with `page_count` pages.
    ///
    /// An `end` past the last page is clamped to it. A `start` past the last page
    /// leaves nothing to narrate and is rejected.
    pub fn clamp_to(&self, page_count: usize) -> Result<PageRange, DocumentError> {
        if page_count == 0 {
            return Err(DocumentError::NoPages);
        }
        if self.start > page_count {
            return Err(DocumentError::PageOutOfRange {
                page: self.start,
                page_count,
            });
        }
        if self.end > page_count {
            tracing::warn!(
                requested_end = self.end,
                page_count = page_count,
                "End page exceeds page count, clamping to last page"
            );
        }

        Ok(PageRange {
            start: self.start,
            end: self.end.min(page_count),
        })
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self { start: 1, end: 1 }
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Concatenate the text of the pages in `range`, in ascending page order, with no
/// separator added between pages. Returns the text with the range actually read,
/// after clamping to the document.
pub fn select_range(
    pages: &PageCollection,
    range: PageRange,
) -> Result<(String, PageRange), DocumentError> {
    let effective = range.clamp_to(pages.page_count())?;
    let text = pages.pages()[effective.start - 1..effective.end].concat();
    Ok((text, effective))
}
