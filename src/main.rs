use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;
use serde_json::{json, Value};

use cooking_agent::config::{load_config, load_config_from};
use cooking_agent::tools::{SeasonalIngredientsTool, SuggestRecipeTool};
use cooking_agent::Agent;

#[derive(Parser)]
#[command(name = "cooking-agent")]
#[command(about = "Recipe suggestion and seasonal ingredient tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a recipe for comma-separated ingredients
    Recipe {
        /// e.g. "卵, ご飯"
        ingredients: String,
    },
    /// List ingredients in season (春, 夏, 秋, 冬)
    Season { season: String },
    /// Print the tool definitions
    Tools,
    /// Print the agent manifest
    Manifest,
    /// Dispatch a raw tool call with JSON arguments
    Call {
        /// Tool name, e.g. "suggest_recipe"
        tool: String,
        /// Arguments object, e.g. '{"ingredients": "豚肉, キャベツ"}'
        args: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    debug!("{:#?}", config);

    let agent = Agent::from_config(&config)?;

    let output = run(&agent, cli.command)?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Execute a subcommand against the agent, honoring its enabled tools
fn run(agent: &Agent, command: Commands) -> Result<Value, Box<dyn std::error::Error>> {
    let output = match command {
        Commands::Recipe { ingredients } => agent.call_tool(
            SuggestRecipeTool::NAME,
            &json!({ "ingredients": ingredients }),
        )?,
        Commands::Season { season } => agent.call_tool(
            SeasonalIngredientsTool::NAME,
            &json!({ "season": season }),
        )?,
        Commands::Tools => Value::Array(agent.tools().definitions()),
        Commands::Manifest => agent.manifest()?,
        Commands::Call { tool, args } => {
            let args: Value = serde_json::from_str(&args)?;
            agent.call_tool(&tool, &args)?
        }
    };

    Ok(output)
}
