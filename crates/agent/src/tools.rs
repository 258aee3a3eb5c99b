//! Agent tools
//!
//! Tools are advertised to the pipeline at session start; the pipeline
//! invokes them by name with JSON arguments and expects a plain-text
//! result.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

use tutor_agent_core::ToolDefinition;

/// Tool execution errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl From<ToolError> for tutor_agent_core::Error {
    fn from(err: ToolError) -> Self {
        tutor_agent_core::Error::Tool(err.to_string())
    }
}

/// A callable tool exposed to the conversational model
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the tool arguments
    fn parameters(&self) -> serde_json::Value;

    /// Execute the tool, returning plain text for the model
    async fn execute(&self, arguments: serde_json::Value) -> Result<String, ToolError>;

    /// Wire-level definition advertised at session start
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Registry of the tools available in a session
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in tool set
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LookupWeatherTool));
        registry
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Definitions for the session start request
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<_> = self.tools.values().map(|t| t.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Execute a tool by name
    pub async fn execute(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<String, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.execute(arguments).await
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Current-weather lookup.
///
/// The weather backend is not wired up yet; the tool answers with a fixed
/// report so the conversation flow can be exercised end to end.
pub struct LookupWeatherTool;

#[async_trait]
impl Tool for LookupWeatherTool {
    fn name(&self) -> &str {
        "lookup_weather"
    }

    fn description(&self) -> &str {
        "Look up current weather information in the given location. \
         If the location is not supported by the weather service, the tool \
         will indicate this; tell the user the location's weather is \
         unavailable."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The location to look up weather information for (e.g. city name)"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<String, ToolError> {
        let location = arguments
            .get("location")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidArguments("missing 'location'".to_string()))?;

        tracing::info!(location, "looking up weather");

        Ok("sunny with a temperature of 70 degrees.".to_string())
    }
}
