//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use nova_prompts::{DEFAULT_OUTPUT, DEFAULT_URL, parse_var};
use std::path::PathBuf;

/// Nova prompt examples: list, inspect and run them against Bedrock.
#[derive(Parser)]
#[command(name = "nova-prompts")]
#[command(about = "Run example prompts against Amazon Nova models on Bedrock", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/nova_prompts/config.toml)
    #[arg(long, global = true, env = "NOVA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of additional prompt files
    #[arg(long, global = true)]
    pub prompts_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available prompts
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: ListFormat,
    },

    /// Print the request a prompt would send, without calling the model
    Show {
        /// Prompt name, category/name, or path to a prompt file
        prompt: String,

        /// Template variable as key=value (repeatable)
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// Run a prompt and print the raw response
    Run {
        /// Prompt name, category/name, or path to a prompt file
        prompt: String,

        /// Model identifier
        #[arg(long)]
        model: Option<String>,

        /// AWS region
        #[arg(long)]
        region: Option<String>,

        /// Template variable as key=value (repeatable)
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// Download a PDF and extract its text to a file
    ExtractPdf {
        /// PDF location
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,

        /// Output text file
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

/// Output format for `list`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// One line per prompt
    Human,
    /// JSON array
    Json,
}
