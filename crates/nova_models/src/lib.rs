//! Amazon Bedrock Runtime client for Converse calls.
//!
//! The client sends one `POST /model/{modelId}/converse` per call and hands
//! back the body untouched. Failures surface as [`nova_error::BedrockError`];
//! nothing is retried.

mod client;
mod config;
mod driver;

pub use client::BedrockClient;
pub use config::{
    BEARER_TOKEN_ENV, BedrockConfig, BedrockConfigBuilder, DEFAULT_MODEL_ID, DEFAULT_REGION,
};
pub use driver::ConverseDriver;
