use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::config::AgentConfig;
use crate::error::ToolError;
use crate::prompt;
use crate::tools::ToolRegistry;

/// A configured recipe suggestion agent: its identity, instruction and tools.
///
/// The model itself runs inside the external agent framework; this type only
/// describes the agent and serves the tool calls the framework routes back.
#[derive(Debug)]
pub struct Agent {
    name: String,
    model: String,
    description: String,
    instruction: String,
    tools: ToolRegistry,
}

/// JSON view of an agent handed to the framework
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    name: &'a str,
    model: &'a str,
    description: &'a str,
    instruction: &'a str,
    tools: Vec<Value>,
}

impl Agent {
    /// Create a new builder seeded with the default configuration
    ///
    /// # Example
    /// ```
    /// use cooking_agent::Agent;
    ///
    /// let agent = Agent::builder().model("gemini-2.0-flash").build().unwrap();
    /// assert_eq!(agent.model(), "gemini-2.0-flash");
    /// ```
    pub fn builder() -> AgentBuilder {
        AgentBuilder::default()
    }

    /// Build an agent from loaded configuration
    pub fn from_config(config: &AgentConfig) -> Result<Self, ToolError> {
        Self::builder().config(config).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Agent description with tool definitions, as consumed by the framework
    pub fn manifest(&self) -> Result<Value, ToolError> {
        let manifest = Manifest {
            name: &self.name,
            model: &self.model,
            description: &self.description,
            instruction: &self.instruction,
            tools: self.tools.definitions(),
        };
        Ok(serde_json::to_value(manifest)?)
    }

    /// Serve a tool call routed back from the framework
    pub fn call_tool(&self, name: &str, args: &Value) -> Result<Value, ToolError> {
        self.tools.dispatch(name, args)
    }
}

/// Builder for configuring an [`Agent`]
#[derive(Debug, Default)]
pub struct AgentBuilder {
    name: Option<String>,
    model: Option<String>,
    description: Option<String>,
    instruction: Option<String>,
    tools: Vec<String>,
}

impl AgentBuilder {
    /// Apply every field of a loaded configuration
    pub fn config(mut self, config: &AgentConfig) -> Self {
        self.name = Some(config.name.clone());
        self.model = Some(config.model.clone());
        self.description = Some(config.description.clone());
        self.instruction = config.instruction.clone();
        self.tools = config.tools.clone();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the embedded instruction prompt
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Restrict the agent to the named tools
    ///
    /// # Example
    /// ```
    /// use cooking_agent::Agent;
    ///
    /// let agent = Agent::builder()
    ///     .tools(["get_seasonal_ingredients"])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(agent.tools().names(), vec!["get_seasonal_ingredients"]);
    /// ```
    pub fn tools<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = names.into_iter().map(Into::into).collect();
        self
    }

    /// Build the agent
    ///
    /// # Errors
    /// Returns `ToolError` if:
    /// - The name or model is blank
    /// - A requested tool does not exist
    pub fn build(self) -> Result<Agent, ToolError> {
        let defaults = AgentConfig::default();

        let name = self.name.unwrap_or(defaults.name);
        if name.trim().is_empty() {
            return Err(ToolError::BuilderError(
                "Agent name must not be empty".to_string(),
            ));
        }

        let model = self.model.unwrap_or(defaults.model);
        if model.trim().is_empty() {
            return Err(ToolError::BuilderError(
                "Agent model must not be empty".to_string(),
            ));
        }

        let tools = if self.tools.is_empty() {
            ToolRegistry::with_defaults()
        } else {
            ToolRegistry::from_names(self.tools.as_slice())?
        };

        info!(
            "Built agent '{}' on model '{}' with tools {:?}",
            name,
            model,
            tools.names()
        );

        Ok(Agent {
            name,
            model,
            description: self.description.unwrap_or(defaults.description),
            instruction: self
                .instruction
                .unwrap_or_else(|| prompt::instruction().to_string()),
            tools,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_agent() {
        let agent = Agent::builder().build().unwrap();
        assert_eq!(agent.name(), "recipe_suggestion_agent");
        assert_eq!(agent.model(), "gemini-1.5-flash");
        assert_eq!(agent.instruction(), prompt::instruction());
        assert_eq!(agent.tools().len(), 2);
    }

    #[test]
    fn test_builder_overrides() {
        let agent = Agent::builder()
            .name("kitchen")
            .description("desc")
            .instruction("短く答える")
            .build()
            .unwrap();
        assert_eq!(agent.name(), "kitchen");
        assert_eq!(agent.description(), "desc");
        assert_eq!(agent.instruction(), "短く答える");
    }

    #[test]
    fn test_blank_model_rejected() {
        let result = Agent::builder().model("  ").build();
        assert!(matches!(result, Err(ToolError::BuilderError(_))));
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let result = Agent::builder().tools(["bake_bread"]).build();
        assert!(matches!(result, Err(ToolError::UnknownTool(_))));
    }

    #[test]
    fn test_from_config() {
        let config = AgentConfig {
            model: "gemini-2.0-flash".to_string(),
            tools: vec!["suggest_recipe".to_string()],
            ..AgentConfig::default()
        };
        let agent = Agent::from_config(&config).unwrap();
        assert_eq!(agent.model(), "gemini-2.0-flash");
        assert_eq!(agent.tools().names(), vec!["suggest_recipe"]);
    }

    #[test]
    fn test_manifest() {
        let manifest = Agent::builder().build().unwrap().manifest().unwrap();
        assert_eq!(manifest["name"], "recipe_suggestion_agent");
        assert_eq!(manifest["tools"].as_array().unwrap().len(), 2);
        assert_eq!(
            manifest["tools"][1]["function"]["name"],
            "get_seasonal_ingredients"
        );
    }

    #[test]
    fn test_call_tool() {
        let agent = Agent::builder().build().unwrap();
        let value = agent
            .call_tool("suggest_recipe", &json!({ "ingredients": "豚肉, キャベツ" }))
            .unwrap();
        assert_eq!(value["recipe"]["name"], "豚キャベツ炒め");
    }
}
