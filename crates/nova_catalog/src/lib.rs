//! Example prompts for Nova models on Amazon Bedrock.
//!
//! Each prompt is a TOML file pairing a system prompt with a user prompt,
//! plus the tools, reasoning effort and sampling parameters it runs with:
//!
//! ```toml
//! [prompt]
//! name = "event_detection"
//! category = "reasoning"
//! description = "Detect security events in log lines."
//!
//! [tools]
//! system = ["nova_grounding", "nova_code_interpreter"]
//!
//! [template]
//! vars = ["domain"]
//!
//! [reasoning]
//! effort = "low"
//!
//! [inference]
//! temperature = 0.3
//! top_p = 0.9
//! max_tokens = 10000
//!
//! [system]
//! text = "You are an expert {domain} analyst."
//!
//! [user]
//! text = "## Data ## ..."
//! ```
//!
//! The built-in prompts are compiled into the binary; more can be loaded from
//! a directory at runtime.

mod builtin;
mod catalog;
mod prompt;
mod render;

pub use catalog::Catalog;
pub use prompt::{Prompt, PromptMetadata};
pub use render::{placeholders, render_template};
