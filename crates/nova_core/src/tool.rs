//! Tool declarations advertised to the model.

use serde::{Deserialize, Serialize};

/// JSON schema describing a tool's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolInputSchema {
    /// Inline JSON schema.
    Json(serde_json::Value),
}

/// A caller-defined function the model may call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpecification {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    input_schema: ToolInputSchema,
}

impl ToolSpecification {
    /// Creates a tool specification.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            input_schema: ToolInputSchema::Json(input_schema),
        }
    }
}

/// A single tool declaration.
///
/// System tools (`nova_grounding`, `nova_code_interpreter`) are executed by the
/// service; tool specs describe functions the caller executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    /// Service-provided tool, serialized as `{"systemTool": {"name": ...}}`.
    SystemTool {
        /// Tool name
        name: String,
    },
    /// Caller-defined tool, serialized as `{"toolSpec": {...}}`.
    ToolSpec(ToolSpecification),
}

impl Tool {
    /// Declares a service-provided tool.
    pub fn system(name: impl Into<String>) -> Self {
        Tool::SystemTool { name: name.into() }
    }

    /// The declared tool name.
    pub fn name(&self) -> &str {
        match self {
            Tool::SystemTool { name } => name,
            Tool::ToolSpec(spec) => spec.name(),
        }
    }
}

/// The set of tools offered in one request, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ToolConfig {
    tools: Vec<Tool>,
}

impl ToolConfig {
    /// Creates a tool configuration from declarations.
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    /// Declares the named system tools, preserving order.
    pub fn system_tools<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Tool::system).collect())
    }

    /// Tool names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(Tool::name).collect()
    }
}
