//! Page-addressable documents.

use nova_error::{DocumentError, DocumentErrorKind};

/// A document whose text can be read one page at a time.
pub trait PageSource {
    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Text of the page at zero-based `index`.
    fn page_text(&self, index: usize) -> Result<String, DocumentError>;
}

/// A PDF parsed from memory.
#[derive(Debug)]
pub struct PdfDocument {
    document: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Parses PDF bytes.
    #[tracing::instrument(skip(bytes), fields(bytes = bytes.len()))]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let document = lopdf::Document::load_mem(bytes)
            .map_err(|e| DocumentError::new(DocumentErrorKind::Parse(e.to_string())))?;
        let page_numbers: Vec<u32> = document.get_pages().into_keys().collect();
        tracing::debug!(pages = page_numbers.len(), "Parsed PDF");
        Ok(Self {
            document,
            page_numbers,
        })
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, DocumentError> {
        let extract_err = |message: String| {
            DocumentError::new(DocumentErrorKind::Extract {
                page: index + 1,
                message,
            })
        };
        let page_number = self
            .page_numbers
            .get(index)
            .ok_or_else(|| extract_err(format!("document has {} pages", self.page_count())))?;
        self.document
            .extract_text(&[*page_number])
            .map_err(|e| extract_err(e.to_string()))
    }
}
