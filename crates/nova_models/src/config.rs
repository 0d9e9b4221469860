//! Connection settings for Bedrock Runtime.

use derive_getters::Getters;
use std::time::Duration;

/// Region the examples target.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Model the examples invoke.
pub const DEFAULT_MODEL_ID: &str = "amazon.nova-2-lite-v1:0";

/// Environment variable holding a Bedrock API key.
pub const BEARER_TOKEN_ENV: &str = "AWS_BEARER_TOKEN_BEDROCK";

/// Bedrock Runtime connection settings.
#[derive(Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct BedrockConfig {
    /// AWS region hosting the runtime endpoint
    #[builder(default = "DEFAULT_REGION.to_string()")]
    region: String,
    /// Endpoint override, e.g. a VPC endpoint or a test server
    #[builder(default, setter(strip_option))]
    endpoint: Option<String>,
    /// Bedrock API key sent as a bearer token
    #[builder(default, setter(strip_option))]
    #[getter(skip)]
    bearer_token: Option<String>,
    /// Whole-request timeout; unset means wait indefinitely
    #[builder(default, setter(strip_option))]
    timeout: Option<Duration>,
}

impl BedrockConfig {
    /// Creates a builder for BedrockConfig.
    pub fn builder() -> BedrockConfigBuilder {
        BedrockConfigBuilder::default()
    }

    /// Settings for `region`, with the bearer token taken from
    /// [`BEARER_TOKEN_ENV`] when set.
    pub fn from_env(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint: None,
            bearer_token: std::env::var(BEARER_TOKEN_ENV)
                .ok()
                .filter(|token| !token.trim().is_empty()),
            timeout: None,
        }
    }

    /// Base URL for runtime calls.
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }

    /// Full Converse URL for `model_id`.
    pub fn converse_url(&self, model_id: &str) -> String {
        format!(
            "{}/model/{}/converse",
            self.base_url(),
            urlencoding::encode(model_id)
        )
    }

    pub(crate) fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// True when a bearer token is configured.
    pub fn has_credentials(&self) -> bool {
        self.bearer_token.is_some()
    }
}

impl std::fmt::Debug for BedrockConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BedrockConfig")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
