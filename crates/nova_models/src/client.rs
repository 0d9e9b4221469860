//! HTTPS client for the Bedrock Runtime Converse operation.

use crate::{BedrockConfig, ConverseDriver};
use async_trait::async_trait;
use nova_core::{ConverseRequest, ConverseResponse};
use nova_error::{BedrockError, BedrockErrorKind, NovaResult};
use tracing::{debug, error, instrument};

/// Bedrock Runtime client.
#[derive(Debug, Clone)]
pub struct BedrockClient {
    client: reqwest::Client,
    config: BedrockConfig,
}

impl BedrockClient {
    /// Creates a new Bedrock client.
    #[instrument(skip(config), fields(region = %config.region()))]
    pub fn new(config: BedrockConfig) -> Result<Self, BedrockError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(*timeout);
        }
        let client = builder.build().map_err(|e| {
            BedrockError::new(BedrockErrorKind::ClientCreation(e.to_string()))
        })?;

        if !config.has_credentials() {
            debug!("No bearer token configured; requests will be unauthenticated");
        }

        Ok(Self { client, config })
    }

    /// The connection settings.
    pub fn config(&self) -> &BedrockConfig {
        &self.config
    }

    /// Sends one Converse request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses (bad request, auth, quota)
    /// and non-JSON bodies are returned as-is. No retry is attempted.
    #[instrument(skip(self, request), fields(model = %model_id))]
    pub async fn converse(
        &self,
        model_id: &str,
        request: &ConverseRequest,
    ) -> Result<ConverseResponse, BedrockError> {
        let url = self.config.converse_url(model_id);
        let body = serde_json::to_vec(request)
            .map_err(|e| BedrockError::new(BedrockErrorKind::Serialize(e.to_string())))?;

        debug!(
            url = %url,
            turns = request.messages().len(),
            body_bytes = body.len(),
            "Sending Converse request"
        );

        let mut http_request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body);
        if let Some(token) = self.config.bearer_token() {
            http_request = http_request.bearer_auth(token);
        }

        let response = http_request.send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            BedrockError::new(BedrockErrorKind::Transport(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<body unreadable: {}>", e));
            error!(status = %status, error = %message, "Bedrock API error");
            return Err(BedrockError::new(BedrockErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            BedrockError::new(BedrockErrorKind::Parse(e.to_string()))
        })?;

        debug!(status = %status, "Received Converse response");
        Ok(ConverseResponse::new(body))
    }
}

#[async_trait]
impl ConverseDriver for BedrockClient {
    async fn converse(
        &self,
        model_id: &str,
        request: &ConverseRequest,
    ) -> NovaResult<ConverseResponse> {
        Ok(BedrockClient::converse(self, model_id, request).await?)
    }
}
