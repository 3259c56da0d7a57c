mod recipe;
mod registry;
mod season;

pub use recipe::SuggestRecipeTool;
pub use registry::ToolRegistry;
pub use season::SeasonalIngredientsTool;

use serde_json::{json, Value};

use crate::error::ToolError;

/// Unified trait for every tool exposed to the agent framework
pub trait Tool: Send + Sync {
    /// Function name the model uses to call this tool (e.g., "suggest_recipe")
    fn name(&self) -> &'static str;

    /// Human-readable description shown to the model
    fn description(&self) -> &'static str;

    /// JSON Schema for the call arguments
    fn parameters(&self) -> Value;

    /// Run the tool against decoded call arguments.
    ///
    /// Input rejections (empty ingredients, unknown season) come back as a tagged
    /// `"status": "error"` value; `Err` is reserved for malformed arguments.
    fn call(&self, args: &Value) -> Result<Value, ToolError>;

    /// Function-calling descriptor for this tool
    fn definition(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name(),
                "description": self.description(),
                "parameters": self.parameters(),
            }
        })
    }
}

/// Schema for a tool taking a single required string argument
fn single_string_parameter(name: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            name: { "type": "string", "description": description }
        },
        "required": [name]
    })
}

/// Pull a required string argument out of a tool call
fn string_argument<'a>(tool: &str, args: &'a Value, name: &str) -> Result<&'a str, ToolError> {
    match args.get(name) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(other) => Err(ToolError::InvalidArguments {
            tool: tool.to_string(),
            reason: format!("'{}' must be a string, got {}", name, other),
        }),
        None => Err(ToolError::InvalidArguments {
            tool: tool.to_string(),
            reason: format!("missing required argument '{}'", name),
        }),
    }
}
