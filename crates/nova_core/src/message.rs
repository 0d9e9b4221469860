//! Message types for conversation turns.

use crate::{ContentBlock, Role};
use serde::{Deserialize, Serialize};

/// A role-tagged conversation turn.
///
/// # Examples
///
/// ```
/// use nova_core::{ContentBlock, Message, Role};
///
/// let message = Message::new(Role::User, vec![ContentBlock::text("Hello!")]);
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The content of the message, in order
    content: Vec<ContentBlock>,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: Vec<ContentBlock>) -> Self {
        Self { role, content }
    }

    /// Creates a user turn holding a single text block.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![ContentBlock::text(text)])
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
