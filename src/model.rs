use std::borrow::Cow;

use serde::Serialize;

use crate::error::ToolError;

/// A suggested recipe.
///
/// Rule-matched recipes borrow their text from the static rule table; only the
/// fallback suggestion owns its name and echoed ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: Cow<'static, str>,
    pub ingredients: Cow<'static, str>,
    /// Numbered steps, e.g. `"1. ..."`
    pub instructions: &'static [&'static str],
}

/// Outcome of [`suggest_recipe`](crate::suggest_recipe)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecipeResult {
    Success { recipe: Recipe },
    Error { error_message: String },
}

/// Outcome of [`get_seasonal_ingredients`](crate::get_seasonal_ingredients)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeasonResult {
    Success { ingredients: &'static [&'static str] },
    Error { error_message: String },
}

impl RecipeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RecipeResult::Success { .. })
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            RecipeResult::Success { recipe } => Some(recipe),
            RecipeResult::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RecipeResult::Success { .. } => None,
            RecipeResult::Error { error_message } => Some(error_message),
        }
    }
}

impl SeasonResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SeasonResult::Success { .. })
    }

    pub fn ingredients(&self) -> Option<&'static [&'static str]> {
        match self {
            SeasonResult::Success { ingredients } => Some(ingredients),
            SeasonResult::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SeasonResult::Success { .. } => None,
            SeasonResult::Error { error_message } => Some(error_message),
        }
    }
}

impl From<Result<Recipe, ToolError>> for RecipeResult {
    fn from(result: Result<Recipe, ToolError>) -> Self {
        match result {
            Ok(recipe) => RecipeResult::Success { recipe },
            Err(e) => RecipeResult::Error {
                error_message: e.to_string(),
            },
        }
    }
}

impl From<Result<&'static [&'static str], ToolError>> for SeasonResult {
    fn from(result: Result<&'static [&'static str], ToolError>) -> Self {
        match result {
            Ok(ingredients) => SeasonResult::Success { ingredients },
            Err(e) => SeasonResult::Error {
                error_message: e.to_string(),
            },
        }
    }
}
