//! Prompt definitions loaded from TOML.

use crate::render::{placeholders, render_template};
use derive_getters::Getters;
use nova_core::{
    AdditionalModelRequestFields, ConverseRequest, InferenceConfig, Message, ReasoningConfig,
    ReasoningEffort, SystemContentBlock, ToolConfig,
};
use nova_error::{CatalogError, CatalogErrorKind, RequestError};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;

/// Identity of a prompt within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Getters)]
pub struct PromptMetadata {
    /// Short identifier, unique within a catalog
    name: String,
    /// Use-case group, e.g. `reasoning`
    #[serde(default)]
    category: String,
    /// One-line summary
    #[serde(default)]
    description: String,
}

impl PromptMetadata {
    /// `category/name`, or just `name` when uncategorized.
    pub fn qualified_name(&self) -> String {
        if self.category.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.category, self.name)
        }
    }
}

#[derive(Debug, Deserialize)]
struct PromptFile {
    prompt: PromptMetadata,
    #[serde(default)]
    tools: ToolsSection,
    #[serde(default)]
    template: TemplateSection,
    reasoning: Option<ReasoningSection>,
    inference: Option<InferenceSection>,
    system: TextSection,
    user: TextSection,
}

#[derive(Debug, Default, Deserialize)]
struct ToolsSection {
    #[serde(default)]
    system: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TemplateSection {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ReasoningSection {
    effort: ReasoningEffort,
}

#[derive(Debug, Deserialize)]
struct InferenceSection {
    temperature: Option<f64>,
    top_p: Option<f64>,
    max_tokens: Option<u32>,
    stop_sequences: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct TextSection {
    text: String,
}

/// A system/user prompt pairing with its tool and generation settings.
///
/// Prompts are values: [`Prompt::render`] returns a new prompt rather than
/// editing this one, so one template can serve many inputs.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Prompt {
    /// Name, category and description
    metadata: PromptMetadata,
    /// System instructions
    system_text: String,
    /// The single user turn
    user_text: String,
    /// System tools offered to the model, in order
    tools: Vec<String>,
    /// Names that [`Prompt::render`] may substitute; other braces are literal text
    template_vars: Vec<String>,
    /// Reasoning effort ceiling, when reasoning is enabled
    reasoning_effort: Option<ReasoningEffort>,
    /// Sampling and length parameters
    inference: Option<InferenceConfig>,
}

impl Prompt {
    /// Loads and validates a prompt from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CatalogError::new(CatalogErrorKind::FileRead(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        content.parse()
    }

    /// The prompt name.
    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    /// Declared template variables still present in the text.
    ///
    /// Braces that are not declared under `[template] vars` (code samples,
    /// JSX) are never reported.
    pub fn placeholders(&self) -> BTreeSet<String> {
        let mut found = placeholders(&self.system_text);
        found.extend(placeholders(&self.user_text));
        found.retain(|name| self.template_vars.contains(name));
        found
    }

    /// Returns a copy with declared `{key}` placeholders filled from `vars`.
    ///
    /// Keys that are not declared template variables are ignored.
    pub fn render(&self, vars: &HashMap<String, String>) -> Self {
        let declared: HashMap<String, String> = vars
            .iter()
            .filter(|(key, _)| self.template_vars.contains(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self {
            system_text: render_template(&self.system_text, &declared),
            user_text: render_template(&self.user_text, &declared),
            ..self.clone()
        }
    }

    /// Assembles the Converse request body for this prompt.
    ///
    /// The request carries one system block, one user turn, the declared
    /// system tools in order, and the inference and reasoning settings.
    #[tracing::instrument(skip(self), fields(prompt = %self.metadata.name))]
    pub fn to_request(&self) -> Result<ConverseRequest, RequestError> {
        let mut builder = ConverseRequest::builder();
        builder
            .system(vec![SystemContentBlock::text(self.system_text.clone())])
            .messages(vec![Message::user(self.user_text.clone())]);

        if !self.tools.is_empty() {
            builder.tool_config(ToolConfig::system_tools(self.tools.iter().cloned()));
        }

        if let Some(inference) = &self.inference {
            builder.inference_config(inference.clone());
        }

        if let Some(effort) = self.reasoning_effort {
            builder.additional_model_request_fields(AdditionalModelRequestFields::with_reasoning(
                ReasoningConfig::enabled(effort),
            ));
        }

        builder.build()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let name = self.metadata.name.clone();

        if name.trim().is_empty() {
            return Err(CatalogError::new(CatalogErrorKind::EmptyName));
        }
        if self.system_text.trim().is_empty() {
            return Err(CatalogError::new(CatalogErrorKind::EmptySystemText(name)));
        }
        if self.user_text.trim().is_empty() {
            return Err(CatalogError::new(CatalogErrorKind::EmptyUserText(name)));
        }

        let mut seen = HashSet::new();
        for tool in &self.tools {
            if tool.trim().is_empty() {
                return Err(CatalogError::new(CatalogErrorKind::EmptyToolName(name)));
            }
            if !seen.insert(tool.as_str()) {
                return Err(CatalogError::new(CatalogErrorKind::DuplicateTool {
                    prompt: name,
                    tool: tool.clone(),
                }));
            }
        }

        let mut found = placeholders(&self.system_text);
        found.extend(placeholders(&self.user_text));
        for var in &self.template_vars {
            if !found.contains(var) {
                return Err(CatalogError::new(CatalogErrorKind::UnusedTemplateVar {
                    prompt: name,
                    var: var.clone(),
                }));
            }
        }

        if let Some(inference) = &self.inference {
            let invalid = |message: String| {
                CatalogError::new(CatalogErrorKind::InvalidParameter {
                    prompt: name.clone(),
                    message,
                })
            };
            if let Some(t) = inference.temperature().filter(|t| !(0.0..=1.0).contains(t)) {
                return Err(invalid(format!("temperature {} is outside [0, 1]", t)));
            }
            if let Some(p) = inference.top_p().filter(|p| !(0.0..=1.0).contains(p)) {
                return Err(invalid(format!("top_p {} is outside [0, 1]", p)));
            }
            if let Some(0) = inference.max_tokens() {
                return Err(invalid("max_tokens must be greater than zero".to_string()));
            }
        }

        Ok(())
    }
}

impl FromStr for Prompt {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: PromptFile = toml::from_str(s)
            .map_err(|e| CatalogError::new(CatalogErrorKind::TomlParse(e.to_string())))?;

        let inference = file.inference.map(|section| {
            let mut builder = InferenceConfig::builder();
            if let Some(t) = section.temperature {
                builder.temperature(t);
            }
            if let Some(p) = section.top_p {
                builder.top_p(p);
            }
            if let Some(m) = section.max_tokens {
                builder.max_tokens(m);
            }
            if let Some(stops) = section.stop_sequences {
                builder.stop_sequences(stops);
            }
            builder.build()
        });
        let inference = inference.transpose().map_err(|e| {
            CatalogError::new(CatalogErrorKind::InvalidParameter {
                prompt: file.prompt.name.clone(),
                message: e.to_string(),
            })
        })?;

        let prompt = Self {
            metadata: file.prompt,
            system_text: file.system.text,
            user_text: file.user.text,
            tools: file.tools.system,
            template_vars: file.template.vars,
            reasoning_effort: file.reasoning.map(|r| r.effort),
            inference,
        };
        prompt.validate()?;

        tracing::debug!(
            prompt = %prompt.metadata.qualified_name(),
            tools = prompt.tools.len(),
            "Loaded prompt"
        );
        Ok(prompt)
    }
}
