//! Request assembly error types.

/// Invariant violations detected while building a Converse request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// The conversation has no turns.
    #[display("Conversation must contain at least one message")]
    EmptyConversation,
    /// The first turn is not a user turn.
    #[display("Conversation must begin with a user turn, found {_0}")]
    FirstTurnNotUser(String),
    /// A message has no content blocks.
    #[display("Message {_0} has no content blocks")]
    EmptyMessage(usize),
    /// A tool declaration has an empty name.
    #[display("Tool declaration has an empty name")]
    EmptyToolName,
    /// A tool name is declared more than once.
    #[display("Tool '{_0}' is declared more than once")]
    DuplicateTool(String),
    /// A builder was missing a required field.
    #[display("Builder error: {_0}")]
    Builder(String),
}

/// Request assembly error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    kind: RequestErrorKind,
    line: u32,
    file: &'static str,
}

impl RequestError {
    /// Create a new request error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RequestErrorKind {
        &self.kind
    }
}

impl<T> From<T> for RequestError
where
    T: Into<RequestErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
