//! Download a PDF and dump its text to a file.
//!
//! The pipeline is deliberately straight-line: fetch the bytes, walk the pages
//! in order, append each page's text followed by a blank line, write the
//! result. Progress is reported on stdout.
//!
//! ```no_run
//! # async fn demo() -> nova_error::NovaResult<()> {
//! use nova_document::{DEFAULT_OUTPUT, DEFAULT_URL, download_and_extract};
//!
//! let extracted = download_and_extract(DEFAULT_URL, DEFAULT_OUTPUT).await?;
//! assert!(extracted.pages() > 0);
//! # Ok(())
//! # }
//! ```

mod download;
mod extract;
mod pdf;
mod pipeline;

pub use download::download;
pub use extract::{ExtractedText, PAGE_SEPARATOR, extract_text, extract_text_with_progress};
pub use pdf::{PageSource, PdfDocument};
pub use pipeline::{DEFAULT_OUTPUT, DEFAULT_URL, download_and_extract, write_text};
