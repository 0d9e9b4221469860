//! Nova prompt runner CLI.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use nova_prompts::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?.with_prompts_dir(cli.prompts_dir);

    match cli.command {
        Commands::List { format } => cli::handle_list(&config, format)?,
        Commands::Show { prompt, vars } => cli::handle_show(&config, &prompt, vars)?,
        Commands::Run {
            prompt,
            model,
            region,
            vars,
        } => {
            let config = config.with_model_id(model).with_region(region);
            cli::handle_run(&config, &prompt, vars).await?
        }
        Commands::ExtractPdf { url, output } => cli::handle_extract(&url, &output).await?,
    }

    Ok(())
}
