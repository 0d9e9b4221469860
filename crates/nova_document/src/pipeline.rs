//! The download, extract and write pipeline.

use crate::{ExtractedText, PdfDocument, download, extract_text_with_progress};
use nova_error::{DocumentError, DocumentErrorKind, NovaResult};
use std::path::Path;
use tracing::instrument;

/// Court filing used by the long-context example.
pub const DEFAULT_URL: &str = "https://www.txs.uscourts.gov/sites/txs/files/newby6028.pdf";

/// Where the extracted text lands by default.
pub const DEFAULT_OUTPUT: &str = "newby6028.txt";

/// Writes `text` as UTF-8, creating or truncating the file.
#[instrument(skip(path, text), fields(path = %path.as_ref().display(), bytes = text.len()))]
pub async fn write_text(path: impl AsRef<Path>, text: &str) -> Result<(), DocumentError> {
    tokio::fs::write(path.as_ref(), text).await.map_err(|e| {
        DocumentError::new(DocumentErrorKind::Write {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })
    })
}

/// Downloads the PDF at `url`, extracts its text and writes it to `output`.
///
/// Progress lines go to stdout.
#[instrument(skip(output), fields(output = %output.as_ref().display()))]
pub async fn download_and_extract(
    url: &str,
    output: impl AsRef<Path>,
) -> NovaResult<ExtractedText> {
    println!("Downloading PDF from {}...", url);
    let bytes = download(url).await?;

    println!("Extracting text from PDF...");
    let document = PdfDocument::from_bytes(&bytes)?;
    let extracted = extract_text_with_progress(&document, |page, total| {
        println!("Processing page {}/{}...", page, total);
    })?;

    println!("Writing text to {}...", output.as_ref().display());
    write_text(output.as_ref(), extracted.text()).await?;

    println!(
        "Done! Extracted {} characters from {} pages.",
        extracted.char_count(),
        extracted.pages()
    );
    Ok(extracted)
}
