//! The Converse response record.

use nova_error::JsonError;
use serde::{Deserialize, Serialize};

/// Raw Converse response.
///
/// The body is kept exactly as the endpoint returned it. Nothing is
/// interpreted; it exists to be rendered for a reader.
///
/// # Examples
///
/// ```
/// use nova_core::ConverseResponse;
///
/// let response = ConverseResponse::new(serde_json::json!({"stopReason": "end_turn"}));
/// assert!(response.to_pretty_json().unwrap().contains("\"stopReason\": \"end_turn\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConverseResponse(serde_json::Value);

impl ConverseResponse {
    /// Wraps a raw response body.
    pub fn new(body: serde_json::Value) -> Self {
        Self(body)
    }

    /// The raw body.
    pub fn body(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the response, returning the raw body.
    pub fn into_body(self) -> serde_json::Value {
        self.0
    }

    /// Renders the body as indented JSON.
    pub fn to_pretty_json(&self) -> Result<String, JsonError> {
        serde_json::to_string_pretty(&self.0).map_err(|e| JsonError::new(e.to_string()))
    }
}

impl From<serde_json::Value> for ConverseResponse {
    fn from(body: serde_json::Value) -> Self {
        Self::new(body)
    }
}
