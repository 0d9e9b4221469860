//! HTTP transport error types.

/// A request that never produced a usable response: connection refused, DNS
/// failure, TLS failure or a body cut off mid-stream.
///
/// Non-success statuses are not transport failures; they are reported by the
/// operation that made the request.
///
/// # Examples
///
/// ```
/// use nova_error::HttpError;
///
/// let err = HttpError::new(
///     "https://www.txs.uscourts.gov/sites/txs/files/newby6028.pdf",
///     "connection reset",
/// );
/// assert_eq!(err.url, "https://www.txs.uscourts.gov/sites/txs/files/newby6028.pdf");
/// assert!(err.to_string().contains("connection reset"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: request to {} failed: {} at line {} in {}", url, message, line, file)]
pub struct HttpError {
    /// Requested URL
    pub url: String,
    /// Transport error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Records a transport failure for `url` at the caller's location.
    #[track_caller]
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            url: url.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
