//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Write as _;

/// Definition of a tool the caller can execute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "TurnOnLight")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter type hint (e.g., "string", "number", "array")
    pub param_type: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter description
    pub description: String,
    /// Element type for array parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
            item_type: None,
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }
}

/// The set of tools advertised by the caller for one request.
///
/// Order-preserving: the catalog renders into the decision prompt in the
/// order the caller supplied it.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDefinition>,
}

/// Name fragments that mark a tool as a context/status/query lookup.
///
/// Used by the heuristic fallback when the model never produced a usable
/// decision but the user was clearly asking for information.
const QUERY_TOOL_MARKERS: &[&str] = &["context", "status", "query", "state", "info", "get"];

impl ToolCatalog {
    pub fn new(tools: Vec<ToolDefinition>) -> Self {
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Find the first tool that looks like a context/status/query lookup.
    ///
    /// Matching is case-insensitive on the tool name.
    pub fn find_query_tool(&self) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| {
            let name = t.name.to_lowercase();
            QUERY_TOOL_MARKERS.iter().any(|m| name.contains(m))
        })
    }

    /// Render the catalog for inclusion in the decision prompt.
    ///
    /// One block per tool: name, description, then one line per parameter
    /// with its type, required flag and description. Empty string for an
    /// empty catalog.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for tool in &self.tools {
            let _ = writeln!(out, "- {}: {}", tool.name, tool.description);
            for param in &tool.parameters {
                let requirement = if param.required { "required" } else { "optional" };
                let ty = match &param.item_type {
                    Some(item) => format!("{}[{}]", param.param_type, item),
                    None => param.param_type.clone(),
                };
                let _ = writeln!(
                    out,
                    "    - {} ({}, {}): {}",
                    param.name, ty, requirement, param.description
                );
            }
        }
        out.trim_end().to_string()
    }
}

impl FromIterator<ToolDefinition> for ToolCatalog {
    fn from_iter<I: IntoIterator<Item = ToolDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A request to invoke a tool, as decided by the engine or carried in
/// history on an assistant turn.
///
/// `arguments` is always a structured JSON mapping, never a serialized
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Name of the tool to call
    pub name: String,
    /// Arguments passed to the tool
    pub arguments: Map<String, Value>,
}

impl ToolCallRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }
}
