//! Bedrock Runtime error types.

/// Bedrock-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BedrockErrorKind {
    /// Failed to create the HTTP client
    ClientCreation(String),
    /// Request could not be sent or the connection failed
    Transport(String),
    /// Endpoint returned a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        message: String,
    },
    /// Response body was not valid JSON
    Parse(String),
    /// Request could not be serialized
    Serialize(String),
}

impl std::fmt::Display for BedrockErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BedrockErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Bedrock client: {}", msg)
            }
            BedrockErrorKind::Transport(msg) => write!(f, "Bedrock request failed: {}", msg),
            BedrockErrorKind::Api { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            BedrockErrorKind::Parse(msg) => write!(f, "Failed to parse Bedrock response: {}", msg),
            BedrockErrorKind::Serialize(msg) => {
                write!(f, "Failed to serialize Bedrock request: {}", msg)
            }
        }
    }
}

impl BedrockErrorKind {
    /// HTTP status code, when the endpoint answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            BedrockErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for rejected or missing credentials (401, 403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// True when the account quota or request rate was exceeded (429).
    pub fn is_throttled(&self) -> bool {
        matches!(self.status(), Some(429))
    }
}

/// Bedrock error with source location tracking.
///
/// # Examples
///
/// ```
/// use nova_error::{BedrockError, BedrockErrorKind};
///
/// let err = BedrockError::new(BedrockErrorKind::Api {
///     status: 429,
///     message: "Too many requests".to_string(),
/// });
/// assert!(err.kind.is_throttled());
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone)]
pub struct BedrockError {
    /// The kind of error that occurred
    pub kind: BedrockErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BedrockError {
    /// Create a new BedrockError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BedrockErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for BedrockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bedrock Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for BedrockError {}
