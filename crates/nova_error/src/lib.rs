//! Error types for the nova_prompts workspace.
//!
//! Every error records the source location where it was created. Crate-specific
//! errors convert into [`NovaError`] so callers can propagate with `?`.

mod bedrock;
mod catalog;
mod config;
mod document;
mod http;
mod json;
mod request;

pub use bedrock::{BedrockError, BedrockErrorKind};
pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
pub use document::{DocumentError, DocumentErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use request::{RequestError, RequestErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum NovaErrorKind {
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// Prompt catalog error
    Catalog(CatalogError),
    /// Request assembly error
    Request(RequestError),
    /// Bedrock Runtime error
    Bedrock(BedrockError),
    /// Document download or extraction error
    Document(DocumentError),
}

impl std::fmt::Display for NovaErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NovaErrorKind::Http(e) => write!(f, "{}", e),
            NovaErrorKind::Json(e) => write!(f, "{}", e),
            NovaErrorKind::Config(e) => write!(f, "{}", e),
            NovaErrorKind::Catalog(e) => write!(f, "{}", e),
            NovaErrorKind::Request(e) => write!(f, "{}", e),
            NovaErrorKind::Bedrock(e) => write!(f, "{}", e),
            NovaErrorKind::Document(e) => write!(f, "{}", e),
        }
    }
}

/// Nova error with kind discrimination.
#[derive(Debug)]
pub struct NovaError(Box<NovaErrorKind>);

impl NovaError {
    /// Create a new error from a kind.
    pub fn new(kind: NovaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NovaErrorKind {
        &self.0
    }
}

impl std::fmt::Display for NovaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nova Error: {}", self.0)
    }
}

impl std::error::Error for NovaError {}

// Generic From implementation for any type that converts to NovaErrorKind
impl<T> From<T> for NovaError
where
    T: Into<NovaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for nova_prompts operations.
pub type NovaResult<T> = std::result::Result<T, NovaError>;
