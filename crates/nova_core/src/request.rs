//! The Converse request record.

use crate::{
    AdditionalModelRequestFields, InferenceConfig, Message, ReasoningConfig, Role,
    SystemContentBlock, ToolConfig,
};
use nova_error::{RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete Converse request body.
///
/// The model identifier is not part of the body; it is supplied to the client
/// alongside the request. Build through [`ConverseRequest::builder`], which
/// checks that the conversation is non-empty, begins with a user turn, and
/// declares each tool name once.
///
/// # Examples
///
/// ```
/// use nova_core::{ConverseRequest, Message, SystemContentBlock, ToolConfig};
///
/// let request = ConverseRequest::builder()
///     .system(vec![SystemContentBlock::text("You are terse.")])
///     .messages(vec![Message::user("Say hi.")])
///     .tool_config(ToolConfig::system_tools(["nova_grounding"]))
///     .build()
///     .expect("valid request");
///
/// assert_eq!(request.messages().len(), 1);
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
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(private, name = "build_unchecked"))]
pub struct ConverseRequest {
    /// System instructions, ahead of every turn
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    system: Vec<SystemContentBlock>,
    /// Conversation turns, in order
    messages: Vec<Message>,
    /// Tools the model may invoke
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
    /// Sampling and length parameters
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inference_config: Option<InferenceConfig>,
    /// Model-specific passthrough fields
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    additional_model_request_fields: Option<AdditionalModelRequestFields>,
}

impl ConverseRequest {
    /// Creates a builder for ConverseRequest.
    pub fn builder() -> ConverseRequestBuilder {
        ConverseRequestBuilder::default()
    }

    /// Checks the conversation and tool invariants.
    pub fn validate(&self) -> Result<(), RequestError> {
        let first = self
            .messages
            .first()
            .ok_or_else(|| RequestError::new(RequestErrorKind::EmptyConversation))?;
        if *first.role() != Role::User {
            return Err(RequestError::new(RequestErrorKind::FirstTurnNotUser(
                first.role().to_string(),
            )));
        }

        if let Some(index) = self.messages.iter().position(|m| m.content().is_empty()) {
            return Err(RequestError::new(RequestErrorKind::EmptyMessage(index)));
        }

        if let Some(tool_config) = &self.tool_config {
            let mut seen = HashSet::new();
            for name in tool_config.names() {
                if name.trim().is_empty() {
                    return Err(RequestError::new(RequestErrorKind::EmptyToolName));
                }
                if !seen.insert(name) {
                    return Err(RequestError::new(RequestErrorKind::DuplicateTool(
                        name.to_string(),
                    )));
                }
            }
        }

        Ok(())
    }

    /// Reasoning configuration, if one was requested.
    pub fn reasoning(&self) -> Option<&ReasoningConfig> {
        self.additional_model_request_fields
            .as_ref()
            .and_then(|fields| fields.reasoning_config().as_ref())
    }
}

impl ConverseRequestBuilder {
    /// Builds the request and checks its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::Builder`] when `messages` was never set, and
    /// the matching [`RequestErrorKind`] when an invariant does not hold.
    #[tracing::instrument(skip(self))]
    pub fn build(&self) -> Result<ConverseRequest, RequestError> {
        let request = self
            .build_unchecked()
            .map_err(|e| RequestError::new(RequestErrorKind::Builder(e.to_string())))?;
        request.validate()?;
        tracing::debug!(
            turns = request.messages.len(),
            system_blocks = request.system.len(),
            "Assembled Converse request"
        );
        Ok(request)
    }
}
