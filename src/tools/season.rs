use log::debug;
use serde_json::Value;

use super::{single_string_parameter, string_argument, Tool};
use crate::error::ToolError;

pub struct SeasonalIngredientsTool;

impl SeasonalIngredientsTool {
    pub const NAME: &'static str = "get_seasonal_ingredients";
}

impl Tool for SeasonalIngredientsTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "季節の食材を提案します。"
    }

    fn parameters(&self) -> Value {
        single_string_parameter("season", "季節（春、夏、秋、冬）")
    }

    fn call(&self, args: &Value) -> Result<Value, ToolError> {
        let season = string_argument(Self::NAME, args, "season")?;
        debug!("get_seasonal_ingredients called with {:?}", season);
        Ok(serde_json::to_value(crate::get_seasonal_ingredients(season))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_returns_ingredients() {
        let value = SeasonalIngredientsTool
            .call(&json!({ "season": "夏" }))
            .unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["ingredients"][0], "トマト");
        assert_eq!(value["ingredients"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_unknown_season_is_tagged_error() {
        let value = SeasonalIngredientsTool
            .call(&json!({ "season": "summer" }))
            .unwrap();
        assert_eq!(value["status"], "error");
        assert!(value["error_message"].as_str().unwrap().contains("'summer'"));
    }

    #[test]
    fn test_non_string_season_is_err() {
        let result = SeasonalIngredientsTool.call(&json!({ "season": null }));
        assert!(result.is_err());
    }
}
