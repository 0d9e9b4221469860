//! Example prompts for Amazon Nova models, and the plumbing to run them.
//!
//! Each example pairs a system prompt with a user prompt for one use case.
//! Running an example builds a Converse request from the prompt, sends it
//! through a [`ConverseDriver`] and hands back the raw response.
//!
//! ```no_run
//! # async fn demo() -> nova_prompts::NovaResult<()> {
//! use nova_prompts::{AppConfig, BedrockClient, Catalog, invoke};
//!
//! let config = AppConfig::load(None)?;
//! let client = BedrockClient::new(config.bedrock_config()?)?;
//! let prompt = Catalog::builtin()?.resolve("event_detection")?;
//!
//! let response = invoke(&client, config.model_id(), &prompt).await?;
//! println!("{}", response.to_pretty_json()?);
//! # Ok(())
//! # }
//! ```

mod invoke;
mod settings;
mod vars;

pub use invoke::{invoke, load_catalog};
pub use settings::{AppConfig, CONFIG_FILE_NAME, ENV_PREFIX};
pub use vars::{parse_var, vars_from_pairs};

pub use nova_catalog::{Catalog, Prompt, PromptMetadata};
pub use nova_core::{ConverseRequest, ConverseResponse};
pub use nova_document::{DEFAULT_OUTPUT, DEFAULT_URL, ExtractedText, download_and_extract};
pub use nova_error::{NovaError, NovaErrorKind, NovaResult};
pub use nova_models::{BedrockClient, BedrockConfig, ConverseDriver, DEFAULT_MODEL_ID, DEFAULT_REGION};
