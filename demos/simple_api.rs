//! Simple API usage with the convenience functions
//!
//! This example shows both tools called directly, then the agent manifest and a
//! tool call routed the way an agent framework would send it.

use cooking_agent::{get_seasonal_ingredients, suggest_recipe, Agent};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Rule-matched recipe
    println!("=== Suggest Recipe ===");
    match suggest_recipe("卵, ご飯").recipe() {
        Some(recipe) => {
            println!("Recipe name: {}", recipe.name);
            println!("Ingredients: {}", recipe.ingredients);
            for step in recipe.instructions {
                println!("  {}", step);
            }
        }
        None => println!("No recipe"),
    }

    // Fallback recipe and empty input
    println!("\n=== Fallback ===");
    println!("{}", serde_json::to_string_pretty(&suggest_recipe("豆腐, 味噌, ねぎ, だし"))?);
    println!("{}", serde_json::to_string_pretty(&suggest_recipe("  "))?);

    // Seasonal lookup
    println!("\n=== Seasonal Ingredients ===");
    for season in ["春", "Spring"] {
        let result = get_seasonal_ingredients(season);
        match result.ingredients() {
            Some(ingredients) => println!("{}: {}", season, ingredients.join("、")),
            None => println!("{}: {}", season, result.error_message().unwrap_or_default()),
        }
    }

    // Agent manifest and dispatch
    println!("\n=== Agent ===");
    let agent = Agent::builder().build()?;
    println!("{}", serde_json::to_string_pretty(&agent.manifest()?)?);

    let reply = agent.call_tool("get_seasonal_ingredients", &json!({ "season": "冬" }))?;
    println!("{}", reply);

    Ok(())
}
