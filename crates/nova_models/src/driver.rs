//! The seam between prompt execution and the remote endpoint.

use async_trait::async_trait;
use nova_core::{ConverseRequest, ConverseResponse};
use nova_error::NovaResult;

/// Anything that can answer a Converse request.
///
/// [`crate::BedrockClient`] is the production implementation; tests and
/// dry runs substitute their own.
#[async_trait]
pub trait ConverseDriver: Send + Sync {
    /// Sends `request` to `model_id` and returns the raw response.
    async fn converse(
        &self,
        model_id: &str,
        request: &ConverseRequest,
    ) -> NovaResult<ConverseResponse>;
}
