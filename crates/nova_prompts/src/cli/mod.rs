//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the nova-prompts binary.

mod commands;
mod extract;
mod list;
mod run;

pub use commands::{Cli, Commands, ListFormat};
pub use extract::handle_extract;
pub use list::handle_list;
pub use run::{handle_run, handle_show};
