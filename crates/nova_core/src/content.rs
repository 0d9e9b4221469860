//! Content blocks carried by system instructions and conversation turns.

use serde::{Deserialize, Serialize};

/// A block of content inside a conversation turn.
///
/// Serializes in the Converse shape, e.g. `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentBlock {
    /// Plain text.
    Text(String),
}

impl ContentBlock {
    /// Creates a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Text of the block, if it is a text block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(text) => Some(text),
        }
    }
}

/// A block of system instructions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SystemContentBlock {
    /// Plain text instructions.
    Text(String),
}

impl SystemContentBlock {
    /// Creates a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Text of the block, if it is a text block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SystemContentBlock::Text(text) => Some(text),
        }
    }
}
