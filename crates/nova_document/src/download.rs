//! Fetching documents over HTTP.

use nova_error::{DocumentError, DocumentErrorKind, HttpError, NovaResult};
use tracing::{debug, error, instrument};

/// Fetches `url` with a single GET and returns the body.
///
/// # Errors
///
/// Connection failures become [`HttpError`]; a non-success status becomes
/// [`DocumentErrorKind::Status`].
#[instrument]
pub async fn download(url: &str) -> NovaResult<Vec<u8>> {
    let response = reqwest::get(url).await.map_err(|e| {
        error!(error = ?e, "Download request failed");
        HttpError::new(url, e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        error!(status = %status, "Download returned error status");
        return Err(DocumentError::new(DocumentErrorKind::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
        .into());
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(url, e.to_string()))?;
    debug!(bytes = bytes.len(), "Download complete");
    Ok(bytes.to_vec())
}
