//! Joining page text into one string.

use crate::PageSource;
use nova_error::DocumentError;

/// Appended after every page, including the last.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Text pulled from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    pages: usize,
}

impl ExtractedText {
    /// The joined text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of pages read.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Length of the text in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Consumes the result, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Extracts every page in order.
///
/// # Examples
///
/// ```
/// use nova_document::{PageSource, extract_text};
/// use nova_error::DocumentError;
///
/// struct Pages(Vec<&'static str>);
///
/// impl PageSource for Pages {
///     fn page_count(&self) -> usize {
///         self.0.len()
///     }
///     fn page_text(&self, index: usize) -> Result<String, DocumentError> {
///         Ok(self.0[index].to_string())
///     }
/// }
///
/// let extracted = extract_text(&Pages(vec!["one", "two"])).unwrap();
/// assert_eq!(extracted.text(), "one\n\ntwo\n\n");
/// ```
pub fn extract_text(source: &impl PageSource) -> Result<ExtractedText, DocumentError> {
    extract_text_with_progress(source, |_, _| {})
}

/// Extracts every page in order, calling `on_page(page, total)` before each
/// page with a one-based page number.
pub fn extract_text_with_progress(
    source: &impl PageSource,
    mut on_page: impl FnMut(usize, usize),
) -> Result<ExtractedText, DocumentError> {
    let pages = source.page_count();
    let mut text = String::new();
    for index in 0..pages {
        on_page(index + 1, pages);
        text.push_str(&source.page_text(index)?);
        text.push_str(PAGE_SEPARATOR);
    }
    Ok(ExtractedText { text, pages })
}
