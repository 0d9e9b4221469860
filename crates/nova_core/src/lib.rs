//! Core data types for the nova_prompts workspace.
//!
//! These types mirror the Bedrock Converse wire format: system instructions,
//! role-tagged conversation turns, tool declarations and generation
//! parameters. Requests are assembled through builders and are read-only
//! afterwards.

mod content;
mod inference;
mod message;
mod reasoning;
mod request;
mod response;
mod role;
mod tool;

pub use content::{ContentBlock, SystemContentBlock};
pub use inference::{InferenceConfig, InferenceConfigBuilder};
pub use message::{Message, MessageBuilder};
pub use reasoning::{
    AdditionalModelRequestFields, ReasoningConfig, ReasoningEffort, ReasoningMode,
};
pub use request::{ConverseRequest, ConverseRequestBuilder};
pub use response::ConverseResponse;
pub use role::Role;
pub use tool::{Tool, ToolConfig, ToolInputSchema, ToolSpecification};
