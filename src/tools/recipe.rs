use log::debug;
use serde_json::Value;

use super::{single_string_parameter, string_argument, Tool};
use crate::error::ToolError;

pub struct SuggestRecipeTool;

impl SuggestRecipeTool {
    pub const NAME: &'static str = "suggest_recipe";
}

impl Tool for SuggestRecipeTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "材料からレシピを提案します。"
    }

    fn parameters(&self) -> Value {
        single_string_parameter("ingredients", "カンマ区切りの材料リスト")
    }

    fn call(&self, args: &Value) -> Result<Value, ToolError> {
        let ingredients = string_argument(Self::NAME, args, "ingredients")?;
        debug!("suggest_recipe called with {:?}", ingredients);
        Ok(serde_json::to_value(crate::suggest_recipe(ingredients))?)
    }
}
