use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Agent configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    /// Agent identifier reported to the framework
    #[serde(default = "default_name")]
    pub name: String,
    /// Model identifier (e.g., "gemini-1.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// One-line description of what the agent does
    #[serde(default = "default_description")]
    pub description: String,
    /// Replaces the embedded instruction prompt when set
    pub instruction: Option<String>,
    /// Names of enabled tools, in registration order (all tools if empty)
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            model: default_model(),
            description: default_description(),
            instruction: None,
            tools: Vec::new(),
        }
    }
}

// Default value functions
fn default_name() -> String {
    "recipe_suggestion_agent".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_description() -> String {
    "ユーザーが提供した材料から料理のレシピを提案するエージェント。".to_string()
}

/// Environment variable prefix; nested keys use a double underscore
const ENV_PREFIX: &str = "COOKING_AGENT";

impl AgentConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKING_AGENT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKING_AGENT__MODEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from `config.toml` (optional) and environment variables
pub fn load_config() -> Result<AgentConfig, ConfigError> {
    build_config(Config::builder().add_source(File::with_name("config").required(false)))
}

/// Load configuration from an explicit file, which must exist
pub fn load_config_from(path: impl AsRef<Path>) -> Result<AgentConfig, ConfigError> {
    build_config(Config::builder().add_source(File::from(path.as_ref()).required(true)))
}

/// Layer environment variables over the given file source and deserialize
fn build_config(builder: ConfigBuilder<DefaultState>) -> Result<AgentConfig, ConfigError> {
    let settings = builder
        // Use double underscore for nested: COOKING_AGENT__MODEL
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("tools")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = AgentConfig::default();
        assert_eq!(config.name, "recipe_suggestion_agent");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert!(config.description.contains("レシピ"));
        assert!(config.instruction.is_none());
        assert!(config.tools.is_empty());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
model = "gemini-2.0-flash"
instruction = "短く答えてください。"
tools = ["get_seasonal_ingredients"]
"#
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.name, "recipe_suggestion_agent");
        assert_eq!(config.instruction.as_deref(), Some("短く答えてください。"));
        assert_eq!(config.tools, vec!["get_seasonal_ingredients".to_string()]);
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let result = load_config_from("/nonexistent/cooking-agent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        // Values match test_load_config_from_file, which may run concurrently
        env::set_var("COOKING_AGENT__MODEL", "gemini-2.0-flash");
        env::set_var("COOKING_AGENT__TOOLS", "get_seasonal_ingredients");

        let result = load_config();

        env::remove_var("COOKING_AGENT__MODEL");
        env::remove_var("COOKING_AGENT__TOOLS");

        let config = result.unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.tools, vec!["get_seasonal_ingredients".to_string()]);
        assert_eq!(config.name, "recipe_suggestion_agent");
    }
}
