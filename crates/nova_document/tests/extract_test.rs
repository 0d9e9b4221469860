use nova_document::{PAGE_SEPARATOR, PageSource, extract_text, extract_text_with_progress};
use nova_error::{DocumentError, DocumentErrorKind};

struct FixedPages(Vec<String>);

impl PageSource for FixedPages {
    fn page_count(&self) -> usize {
        self.0.len()
    }

    fn page_text(&self, index: usize) -> Result<String, DocumentError> {
        Ok(self.0[index].clone())
    }
}

struct BrokenSecondPage;

impl PageSource for BrokenSecondPage {
    fn page_count(&self) -> usize {
        3
    }

    fn page_text(&self, index: usize) -> Result<String, DocumentError> {
        if index == 1 {
            return Err(DocumentError::new(DocumentErrorKind::Extract {
                page: index + 1,
                message: "bad content stream".to_string(),
            }));
        }
        Ok("ok".to_string())
    }
}

fn sample() -> FixedPages {
    FixedPages(vec![
        "First page of the filing.".to_string(),
        String::new(),
        "Third page, with accents: déjà vu.".to_string(),
    ])
}

#[test]
fn test_length_is_pages_plus_separators() {
    let source = sample();
    let extracted = extract_text(&source).expect("extracts");

    let page_chars: usize = source.0.iter().map(|p| p.chars().count()).sum();
    let separators = source.0.len() * PAGE_SEPARATOR.chars().count();

    assert_eq!(extracted.pages(), 3);
    assert_eq!(extracted.char_count(), page_chars + separators);
}

#[test]
fn test_pages_appear_in_order_with_trailing_separator() {
    let extracted = extract_text(&sample()).expect("extracts");
    assert_eq!(
        extracted.text(),
        "First page of the filing.\n\n\n\nThird page, with accents: déjà vu.\n\n"
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let source = sample();
    let first = extract_text(&source).expect("extracts");
    let second = extract_text(&source).expect("extracts");
    assert_eq!(first, second);
}

#[test]
fn test_empty_document() {
    let extracted = extract_text(&FixedPages(Vec::new())).expect("extracts");
    assert_eq!(extracted.pages(), 0);
    assert_eq!(extracted.text(), "");
}

#[test]
fn test_progress_reports_each_page() {
    let mut seen = Vec::new();
    extract_text_with_progress(&sample(), |page, total| seen.push((page, total)))
        .expect("extracts");
    assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
}

#[test]
fn test_page_failure_stops_extraction() {
    let err = extract_text(&BrokenSecondPage).expect_err("second page fails");
    assert!(matches!(
        err.kind(),
        DocumentErrorKind::Extract { page: 2, .. }
    ));
}
