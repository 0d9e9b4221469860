//! Generation parameters.

use serde::{Deserialize, Serialize};

/// Sampling and length parameters for a Converse call.
///
/// Unset fields are omitted from the request so the model's defaults apply.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct InferenceConfig {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Nucleus-sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    /// Maximum number of output tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sequences that stop generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop_sequences: Option<Vec<String>>,
}

impl InferenceConfig {
    /// Creates a builder for InferenceConfig.
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }

    /// True when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.top_p.is_none()
            && self.max_tokens.is_none()
            && self.stop_sequences.is_none()
    }
}
