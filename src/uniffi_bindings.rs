//! UniFFI bindings for cooking-agent
//!
//! This module provides FFI-compatible types and functions so host-language agent
//! frameworks can load the tools from the cdylib. Every tool is synchronous, so the
//! exported functions call straight into the core without a runtime.

use log::error;

use crate::{Agent, AgentBuilder, Recipe, RecipeResult, Season, SeasonResult};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    /// Dish name
    pub name: String,
    /// Canonical ingredient list, or the caller's input echoed back
    pub ingredients: String,
    /// Numbered cooking steps
    pub instructions: Vec<String>,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            name: recipe.name.into_owned(),
            ingredients: recipe.ingredients.into_owned(),
            instructions: recipe
                .instructions
                .iter()
                .map(|step| step.to_string())
                .collect(),
        }
    }
}

/// FFI-compatible recipe suggestion outcome
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiRecipeResult {
    Success { recipe: FfiRecipe },
    Error { message: String },
}

impl From<RecipeResult> for FfiRecipeResult {
    fn from(result: RecipeResult) -> Self {
        match result {
            RecipeResult::Success { recipe } => FfiRecipeResult::Success {
                recipe: recipe.into(),
            },
            RecipeResult::Error { error_message } => FfiRecipeResult::Error {
                message: error_message,
            },
        }
    }
}

/// FFI-compatible seasonal lookup outcome
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiSeasonResult {
    Success { ingredients: Vec<String> },
    Error { message: String },
}

impl From<SeasonResult> for FfiSeasonResult {
    fn from(result: SeasonResult) -> Self {
        match result {
            SeasonResult::Success { ingredients } => FfiSeasonResult::Success {
                ingredients: ingredients.iter().map(|name| name.to_string()).collect(),
            },
            SeasonResult::Error { error_message } => FfiSeasonResult::Error {
                message: error_message,
            },
        }
    }
}

/// Suggest a recipe for a comma-separated ingredient list
///
/// # Arguments
/// * `ingredients` - Ingredient names separated by commas
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn suggest_recipe_ffi(ingredients: String) -> FfiRecipeResult {
    crate::suggest_recipe(&ingredients).into()
}

/// List seasonal ingredients
///
/// # Arguments
/// * `season` - One of 春, 夏, 秋, 冬 (exact match)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_seasonal_ingredients_ffi(season: String) -> FfiSeasonResult {
    crate::get_seasonal_ingredients(&season).into()
}

/// The accepted season keys in calendar order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_seasons() -> Vec<String> {
    Season::ALL
        .iter()
        .map(|season| season.key().to_string())
        .collect()
}

/// Default agent manifest as a JSON string
///
/// Returns an empty string if the manifest cannot be built.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn agent_manifest_json() -> String {
    manifest_json(Agent::builder())
}

fn manifest_json(builder: AgentBuilder) -> String {
    match builder.build().and_then(|agent| agent.manifest()) {
        Ok(manifest) => manifest.to_string(),
        Err(e) => {
            error!("Failed to build agent manifest: {}", e);
            String::new()
        }
    }
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_recipe_conversion() {
        match suggest_recipe_ffi("豚肉, キャベツ".to_string()) {
            FfiRecipeResult::Success { recipe } => {
                assert_eq!(recipe.name, "豚キャベツ炒め");
                assert_eq!(recipe.ingredients, "豚肉、キャベツ、塩、胡椒、醤油、ごま油");
                assert_eq!(recipe.instructions.len(), 4);
            }
            FfiRecipeResult::Error { message } => panic!("Unexpected error: {}", message),
        }
    }

    #[test]
    fn test_ffi_recipe_error() {
        assert_eq!(
            suggest_recipe_ffi("  ".to_string()),
            FfiRecipeResult::Error {
                message: "材料を入力してください。".to_string()
            }
        );
    }

    #[test]
    fn test_ffi_season_conversion() {
        match get_seasonal_ingredients_ffi("秋".to_string()) {
            FfiSeasonResult::Success { ingredients } => {
                assert_eq!(ingredients[0], "さつまいも");
            }
            FfiSeasonResult::Error { message } => panic!("Unexpected error: {}", message),
        }
        assert!(matches!(
            get_seasonal_ingredients_ffi("autumn".to_string()),
            FfiSeasonResult::Error { .. }
        ));
    }

    #[test]
    fn test_list_seasons() {
        assert_eq!(list_seasons(), vec!["春", "夏", "秋", "冬"]);
    }

    #[test]
    fn test_agent_manifest_json() {
        let manifest: serde_json::Value = serde_json::from_str(&agent_manifest_json()).unwrap();
        assert_eq!(manifest["model"], "gemini-1.5-flash");
    }

    #[test]
    fn test_manifest_json_build_failure_is_empty() {
        assert_eq!(manifest_json(Agent::builder().model("")), "");
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
