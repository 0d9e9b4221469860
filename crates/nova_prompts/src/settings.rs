//! Layered runtime settings.

use derive_getters::Getters;
use nova_error::ConfigError;
use nova_models::{BEARER_TOKEN_ENV, BedrockConfig, DEFAULT_MODEL_ID, DEFAULT_REGION};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix for environment overrides, e.g. `NOVA_REGION`.
pub const ENV_PREFIX: &str = "NOVA";

/// File looked up under the user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Runtime settings for the prompt runner.
///
/// Sources are layered lowest to highest: built-in defaults, the TOML config
/// file, then `NOVA_*` environment variables. Command-line flags are applied
/// last by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct AppConfig {
    /// AWS region hosting the Bedrock Runtime endpoint
    region: String,
    /// Model invoked by `run`
    model_id: String,
    /// Endpoint override
    endpoint: Option<String>,
    /// Request timeout in seconds; unset waits indefinitely
    timeout_secs: Option<u64>,
    /// Extra directory of prompt files
    prompts_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            endpoint: None,
            timeout_secs: None,
            prompts_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads settings from the config file and the process environment.
    ///
    /// An explicit `path` must exist. Without one, the user config file
    /// (`<config dir>/nova_prompts/config.toml`) is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`AppConfig::load`], reading `NOVA_*` variables from `env`
    /// instead of the process environment when given.
    #[tracing::instrument(skip(env))]
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(path) = default_config_path() {
                    tracing::debug!(path = %path.display(), "Checking user config file");
                    builder = builder.add_source(config::File::from(path).required(false));
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let config: Self = builder
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| ConfigError::new(e.to_string()))?;
        config.validate()?;

        tracing::debug!(
            region = %config.region,
            model = %config.model_id,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Replaces the region when `region` is set.
    pub fn with_region(mut self, region: Option<String>) -> Self {
        if let Some(region) = region {
            self.region = region;
        }
        self
    }

    /// Replaces the model when `model_id` is set.
    pub fn with_model_id(mut self, model_id: Option<String>) -> Self {
        if let Some(model_id) = model_id {
            self.model_id = model_id;
        }
        self
    }

    /// Replaces the prompts directory when `dir` is set.
    pub fn with_prompts_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.prompts_dir = dir;
        }
        self
    }

    /// Client settings, with the bearer token read from the environment.
    pub fn bedrock_config(&self) -> Result<BedrockConfig, ConfigError> {
        let token = std::env::var(BEARER_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());
        if token.is_none() {
            tracing::warn!("{} is not set; Bedrock will reject the call", BEARER_TOKEN_ENV);
        }
        self.bedrock_config_with_token(token)
    }

    /// Client settings with an explicit bearer token.
    pub fn bedrock_config_with_token(
        &self,
        token: Option<String>,
    ) -> Result<BedrockConfig, ConfigError> {
        let mut builder = BedrockConfig::builder();
        builder.region(self.region.clone());
        if let Some(endpoint) = &self.endpoint {
            builder.endpoint(endpoint.clone());
        }
        if let Some(token) = token {
            builder.bearer_token(token);
        }
        if let Some(secs) = self.timeout_secs {
            builder.timeout(Duration::from_secs(secs));
        }
        builder.build().map_err(|e| ConfigError::new(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::new("region must not be empty"));
        }
        if self.model_id.trim().is_empty() {
            return Err(ConfigError::new("model_id must not be empty"));
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::new("timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nova_prompts").join(CONFIG_FILE_NAME))
}
