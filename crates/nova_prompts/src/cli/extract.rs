//! PDF extraction command handler.

use nova_prompts::{NovaResult, download_and_extract};
use std::path::Path;

/// Downloads a PDF and writes its text to `output`.
pub async fn handle_extract(url: &str, output: &Path) -> NovaResult<()> {
    download_and_extract(url, output).await?;
    Ok(())
}
