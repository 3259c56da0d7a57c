use thiserror::Error;

/// Errors that can occur while serving agent tools
#[derive(Error, Debug)]
pub enum ToolError {
    /// Ingredient list was empty or contained only whitespace
    #[error("材料を入力してください。")]
    EmptyInput,

    /// Season name did not match one of the recognized keys
    #[error("'{0}' は有効な季節ではありません。春、夏、秋、冬のいずれかを指定してください。")]
    InvalidSeason(String),

    /// No tool is registered under the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool call arguments were missing or had the wrong shape
    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// Agent builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to encode a tool result or manifest as JSON
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ToolError {
    /// Whether this error is an input rejection that belongs in a tagged tool result
    /// rather than a failure of the tool plumbing itself.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, ToolError::EmptyInput | ToolError::InvalidSeason(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_season_message_lists_all_keys() {
        let message = ToolError::InvalidSeason("Spring".to_string()).to_string();
        assert!(message.contains("'Spring'"));
        for key in ["春", "夏", "秋", "冬"] {
            assert!(message.contains(key));
        }
    }

    #[test]
    fn test_domain_errors() {
        assert!(ToolError::EmptyInput.is_domain_error());
        assert!(ToolError::InvalidSeason(String::new()).is_domain_error());
        assert!(!ToolError::UnknownTool("x".to_string()).is_domain_error());
    }
}
