//! Extended reasoning parameters passed through `additionalModelRequestFields`.

use serde::{Deserialize, Serialize};

/// How hard the model may think before answering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

/// Whether extended reasoning is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReasoningMode {
    Enabled,
    Disabled,
}

/// Reasoning configuration, serialized as
/// `{"type": "enabled", "maxReasoningEffort": "low"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningConfig {
    #[serde(rename = "type")]
    mode: ReasoningMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_reasoning_effort: Option<ReasoningEffort>,
}

impl ReasoningConfig {
    /// Reasoning enabled with the given effort ceiling.
    pub fn enabled(effort: ReasoningEffort) -> Self {
        Self {
            mode: ReasoningMode::Enabled,
            max_reasoning_effort: Some(effort),
        }
    }

    /// Reasoning switched off.
    pub fn disabled() -> Self {
        Self {
            mode: ReasoningMode::Disabled,
            max_reasoning_effort: None,
        }
    }
}

/// Model-specific fields the Converse API forwards untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalModelRequestFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reasoning_config: Option<ReasoningConfig>,
}

impl AdditionalModelRequestFields {
    /// Fields carrying only a reasoning configuration.
    pub fn with_reasoning(reasoning: ReasoningConfig) -> Self {
        Self {
            reasoning_config: Some(reasoning),
        }
    }
}
