//! Show and run command handlers.

use nova_error::JsonError;
use nova_prompts::{
    AppConfig, BedrockClient, NovaResult, Prompt, invoke, load_catalog, vars_from_pairs,
};

fn resolve_prompt(
    config: &AppConfig,
    name_or_path: &str,
    vars: Vec<(String, String)>,
) -> NovaResult<Prompt> {
    let catalog = load_catalog(config.prompts_dir().as_deref())?;
    let prompt = catalog.resolve(name_or_path)?;
    if vars.is_empty() {
        return Ok(prompt);
    }
    Ok(prompt.render(&vars_from_pairs(vars)))
}

/// Prints the request body for a prompt. No network call is made.
#[tracing::instrument(skip(config, vars))]
pub fn handle_show(config: &AppConfig, prompt: &str, vars: Vec<(String, String)>) -> NovaResult<()> {
    let prompt = resolve_prompt(config, prompt, vars)?;
    let request = prompt.to_request()?;
    let text =
        serde_json::to_string_pretty(&request).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

/// Runs a prompt against the configured model and prints the response.
#[tracing::instrument(skip(config, vars), fields(model = %config.model_id()))]
pub async fn handle_run(
    config: &AppConfig,
    prompt: &str,
    vars: Vec<(String, String)>,
) -> NovaResult<()> {
    let prompt = resolve_prompt(config, prompt, vars)?;
    let unfilled = prompt.placeholders();
    if !unfilled.is_empty() {
        tracing::warn!(placeholders = ?unfilled, "Prompt has unfilled placeholders; sending them literally");
    }

    let client = BedrockClient::new(config.bedrock_config()?)?;
    let response = invoke(&client, config.model_id(), &prompt).await?;
    println!("{}", response.to_pretty_json()?);
    Ok(())
}
