//! Configuration error types.

/// Settings could not be loaded or failed validation.
///
/// # Examples
///
/// ```
/// use nova_error::ConfigError;
///
/// let err = ConfigError::new("timeout_secs must be greater than zero");
/// assert!(err.to_string().starts_with("Configuration Error: timeout_secs"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the settings
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Records a configuration problem at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
