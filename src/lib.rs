//! Recipe suggestion and seasonal ingredient tools for conversational agents.
//!
//! The two tools are pure lookups over static tables:
//!
//! ```
//! use cooking_agent::{get_seasonal_ingredients, suggest_recipe};
//!
//! let recipe = suggest_recipe("卵, ご飯");
//! assert_eq!(recipe.recipe().unwrap().name, "オムライス");
//!
//! let spring = get_seasonal_ingredients("春");
//! assert_eq!(spring.ingredients().unwrap().len(), 5);
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod prompt;
pub mod seasons;
pub mod tools;
pub mod uniffi_bindings;

// Re-export main types
pub use agent::{Agent, AgentBuilder};
pub use config::AgentConfig;
pub use error::ToolError;
pub use model::{Recipe, RecipeResult, SeasonResult};
pub use seasons::Season;
pub use tools::{Tool, ToolRegistry};

/// Suggest a recipe for a comma-separated ingredient list.
///
/// Never fails: an empty or whitespace-only list yields [`RecipeResult::Error`].
pub fn suggest_recipe(ingredients: &str) -> RecipeResult {
    matcher::match_recipe(ingredients).into()
}

/// List the ingredients in season for `season` (one of 春, 夏, 秋, 冬).
///
/// The key must match exactly; anything else yields [`SeasonResult::Error`].
pub fn get_seasonal_ingredients(season: &str) -> SeasonResult {
    seasons::lookup(season).into()
}
