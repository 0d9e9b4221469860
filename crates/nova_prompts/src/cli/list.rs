//! List command handler.

use super::ListFormat;
use nova_prompts::{AppConfig, NovaResult, load_catalog};

/// Prints the catalog, grouped by category.
#[tracing::instrument(skip(config))]
pub fn handle_list(config: &AppConfig, format: ListFormat) -> NovaResult<()> {
    let catalog = load_catalog(config.prompts_dir().as_deref())?;

    match format {
        ListFormat::Human => {
            let width = catalog
                .list()
                .iter()
                .map(|p| p.metadata().qualified_name().len())
                .max()
                .unwrap_or(0);
            for prompt in catalog.list() {
                println!(
                    "{:<width$}  {}",
                    prompt.metadata().qualified_name(),
                    prompt.metadata().description(),
                    width = width
                );
            }
        }
        ListFormat::Json => {
            let entries: Vec<_> = catalog
                .list()
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "name": p.name(),
                        "category": p.metadata().category(),
                        "description": p.metadata().description(),
                        "tools": p.tools(),
                        "placeholders": p.placeholders(),
                    })
                })
                .collect();
            let text = serde_json::to_string_pretty(&entries)
                .map_err(|e| nova_error::JsonError::new(e.to_string()))?;
            println!("{}", text);
        }
    }

    Ok(())
}
