//! Document download and extraction error types.

/// Error kinds for document operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DocumentErrorKind {
    /// Server answered with a non-success status.
    #[display("Download of {url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },
    /// Bytes could not be parsed as a PDF.
    #[display("Failed to parse PDF: {_0}")]
    Parse(String),
    /// Text extraction failed for a page.
    #[display("Failed to extract text from page {page}: {message}")]
    Extract {
        /// One-based page number
        page: usize,
        /// Underlying error message
        message: String,
    },
    /// Output file could not be written.
    #[display("Failed to write {path}: {message}")]
    Write {
        /// Output path
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Document error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: {} at line {} in {}", kind, line, file)]
pub struct DocumentError {
    kind: DocumentErrorKind,
    line: u32,
    file: &'static str,
}

impl DocumentError {
    /// Create a new document error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocumentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DocumentErrorKind {
        &self.kind
    }
}
