use log::{debug, info};
use serde_json::Value;

use super::{SeasonalIngredientsTool, SuggestRecipeTool, Tool};
use crate::error::ToolError;

/// Ordered set of tools exposed to the agent
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a tool instance by name
    pub fn create(tool_name: &str) -> Result<Box<dyn Tool>, ToolError> {
        match tool_name {
            SuggestRecipeTool::NAME => Ok(Box::new(SuggestRecipeTool)),
            SeasonalIngredientsTool::NAME => Ok(Box::new(SeasonalIngredientsTool)),
            _ => Err(ToolError::UnknownTool(tool_name.to_string())),
        }
    }

    /// List all available tool names
    pub fn available_tools() -> Vec<&'static str> {
        vec![SuggestRecipeTool::NAME, SeasonalIngredientsTool::NAME]
    }

    /// Registry holding every available tool
    pub fn with_defaults() -> Self {
        Self {
            tools: vec![Box::new(SuggestRecipeTool), Box::new(SeasonalIngredientsTool)],
        }
    }

    /// Registry holding only the named tools, in the given order
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ToolError> {
        let mut tools = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if tools.iter().any(|tool: &Box<dyn Tool>| tool.name() == name) {
                debug!("Skipping duplicate tool '{}'", name);
                continue;
            }
            tools.push(Self::create(name)?);
            info!("Registered tool '{}'", name);
        }

        if tools.is_empty() {
            return Err(ToolError::BuilderError(
                "At least one tool must be enabled".to_string(),
            ));
        }

        Ok(Self { tools })
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Function-calling descriptors for every registered tool
    pub fn definitions(&self) -> Vec<Value> {
        self.tools.iter().map(|tool| tool.definition()).collect()
    }

    /// Route a tool call by name
    pub fn dispatch(&self, name: &str, args: &Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        debug!("Dispatching tool call '{}'", name);
        tool.call(args)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}
