//! Prompt catalog error types.

/// Specific error conditions for prompt catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogErrorKind {
    /// Failed to read a prompt file or directory
    FileRead(String),
    /// Failed to parse TOML content
    TomlParse(String),
    /// Prompt name is empty
    EmptyName,
    /// System text is empty or contains only whitespace
    EmptySystemText(String),
    /// User text is empty or contains only whitespace
    EmptyUserText(String),
    /// A declared tool has an empty name
    EmptyToolName(String),
    /// The same tool is declared twice in one prompt
    DuplicateTool {
        /// Prompt name
        prompt: String,
        /// Tool name
        tool: String,
    },
    /// An inference parameter is outside its valid range
    InvalidParameter {
        /// Prompt name
        prompt: String,
        /// Description of the offending parameter
        message: String,
    },
    /// A declared template variable never appears in the prompt text
    UnusedTemplateVar {
        /// Prompt name
        prompt: String,
        /// Variable name
        var: String,
    },
    /// Two prompts in one catalog share a name
    DuplicatePrompt(String),
    /// No prompt matches the requested name
    UnknownPrompt(String),
}

impl std::fmt::Display for CatalogErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogErrorKind::FileRead(msg) => write!(f, "Failed to read prompt file: {}", msg),
            CatalogErrorKind::TomlParse(msg) => write!(f, "Failed to parse TOML: {}", msg),
            CatalogErrorKind::EmptyName => write!(f, "Prompt name (prompt.name) cannot be empty"),
            CatalogErrorKind::EmptySystemText(name) => {
                write!(f, "Prompt '{}' has empty system text", name)
            }
            CatalogErrorKind::EmptyUserText(name) => {
                write!(f, "Prompt '{}' has empty user text", name)
            }
            CatalogErrorKind::EmptyToolName(name) => {
                write!(f, "Prompt '{}' declares a tool with an empty name", name)
            }
            CatalogErrorKind::DuplicateTool { prompt, tool } => write!(
                f,
                "Prompt '{}' declares tool '{}' more than once",
                prompt, tool
            ),
            CatalogErrorKind::InvalidParameter { prompt, message } => {
                write!(f, "Prompt '{}' has an invalid parameter: {}", prompt, message)
            }
            CatalogErrorKind::UnusedTemplateVar { prompt, var } => write!(
                f,
                "Prompt '{}' declares template variable '{}' but never uses {{{}}}",
                prompt, var, var
            ),
            CatalogErrorKind::DuplicatePrompt(name) => {
                write!(f, "Prompt '{}' is defined more than once", name)
            }
            CatalogErrorKind::UnknownPrompt(name) => write!(f, "No prompt named '{}'", name),
        }
    }
}

/// Error type for prompt catalog operations.
///
/// # Examples
///
/// ```
/// use nova_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::UnknownPrompt("missing".to_string()));
/// assert!(format!("{}", err).contains("missing"));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogError {
    /// The specific error condition
    pub kind: CatalogErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new CatalogError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Catalog Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for CatalogError {}
