//! Running a prompt against a model.

use nova_catalog::{Catalog, Prompt};
use nova_core::ConverseResponse;
use nova_error::NovaResult;
use nova_models::ConverseDriver;
use std::path::Path;
use tracing::{info, instrument};

/// Builds the request for `prompt` and sends it once through `driver`.
///
/// The response comes back untouched. Errors from request assembly or the
/// call itself are returned without retry.
#[instrument(skip(driver, prompt), fields(prompt = %prompt.name()))]
pub async fn invoke<D>(driver: &D, model_id: &str, prompt: &Prompt) -> NovaResult<ConverseResponse>
where
    D: ConverseDriver + ?Sized,
{
    let request = prompt.to_request()?;
    let response = driver.converse(model_id, &request).await?;
    info!(model = %model_id, "Prompt completed");
    Ok(response)
}

/// The built-in catalog, plus every prompt under `prompts_dir` when given.
#[instrument(skip(prompts_dir))]
pub fn load_catalog(prompts_dir: Option<&Path>) -> NovaResult<Catalog> {
    let mut catalog = Catalog::builtin()?;
    if let Some(dir) = prompts_dir {
        catalog.merge(Catalog::from_dir(dir)?)?;
    }
    Ok(catalog)
}
