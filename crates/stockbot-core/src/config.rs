//! Configuration for the stock menu bot

use crate::error::{Result, StockBotError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the stock data file
pub const DEFAULT_DATA_PATH: &str = "stock_data.json";

/// Placeholder shown in an empty input field; submitting it is a no-op
pub const DEFAULT_PLACEHOLDER: &str = "Please pick an option.";

/// Greeting shown at the top of the main menu
pub const DEFAULT_GREETING: &str = "Hello! Welcome to LSEG. I'm here to help you.";

/// Environment variable naming the stock data file
pub const DATA_PATH_VAR: &str = "STOCKBOT_DATA";

/// Environment variable overriding the greeting
pub const GREETING_VAR: &str = "STOCKBOT_GREETING";

/// Configuration for the bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Path of the JSON stock data file
    pub data_path: PathBuf,
    /// Greeting line of the main menu
    pub greeting: String,
    /// Placeholder text of the input field
    pub placeholder: String,
    /// Prompt prefix for terminal front ends
    pub prompt: String,
    /// Maximum transcript entries kept, 0 for unbounded
    pub max_transcript: usize,
    /// Whether front ends prefix rendered entries with their time
    pub show_timestamps: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            greeting: DEFAULT_GREETING.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            prompt: ">>> ".to_string(),
            max_transcript: 0,
            show_timestamps: false,
        }
    }
}

impl BotConfig {
    /// Create a builder
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(StockBotError::Config("data path must not be empty".to_string()));
        }

        if self.placeholder.trim().is_empty() {
            return Err(StockBotError::Config(
                "placeholder must contain visible text".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for BotConfig
#[derive(Debug, Default)]
pub struct BotConfigBuilder {
    data_path: Option<PathBuf>,
    greeting: Option<String>,
    placeholder: Option<String>,
    prompt: Option<String>,
    max_transcript: Option<usize>,
    show_timestamps: Option<bool>,
}

impl BotConfigBuilder {
    /// Load `STOCKBOT_DATA` and `STOCKBOT_GREETING` from the environment
    ///
    /// Nothing is validated here, so later setters can still override a
    /// bad value before [`BotConfig::validate`] runs.
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`with_env`](Self::with_env) with a custom variable lookup
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(DATA_PATH_VAR) {
            self.data_path = Some(path.into());
        }
        if let Some(greeting) = lookup(GREETING_VAR) {
            self.greeting = Some(greeting);
        }
        self
    }

    /// Set the stock data path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Set the main menu greeting
    pub fn greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Set max transcript size
    pub fn max_transcript(mut self, max: usize) -> Self {
        self.max_transcript = Some(max);
        self
    }

    /// Set show timestamps
    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = Some(show);
        self
    }

    /// Build the config
    pub fn build(self) -> BotConfig {
        let defaults = BotConfig::default();
        BotConfig {
            data_path: self.data_path.unwrap_or(defaults.data_path),
            greeting: self.greeting.unwrap_or(defaults.greeting),
            placeholder: self.placeholder.unwrap_or(defaults.placeholder),
            prompt: self.prompt.unwrap_or(defaults.prompt),
            max_transcript: self.max_transcript.unwrap_or(defaults.max_transcript),
            show_timestamps: self.show_timestamps.unwrap_or(defaults.show_timestamps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_bot_config_default() {
        let config = BotConfig::default();
        assert_eq!(config.data_path, PathBuf::from("stock_data.json"));
        assert_eq!(config.placeholder, "Please pick an option.");
        assert_eq!(config.prompt, ">>> ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bot_config_builder() {
        let config = BotConfig::builder()
            .data_path("/tmp/exchanges.json")
            .greeting("Hi")
            .prompt("$ ")
            .max_transcript(100)
            .show_timestamps(true)
            .build();

        assert_eq!(config.data_path, PathBuf::from("/tmp/exchanges.json"));
        assert_eq!(config.greeting, "Hi");
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.max_transcript, 100);
        assert!(config.show_timestamps);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = BotConfig::builder()
            .with_vars(vars(&[
                ("STOCKBOT_DATA", "/srv/exchanges.json"),
                ("STOCKBOT_GREETING", "Welcome back"),
            ]))
            .build();

        assert_eq!(config.data_path, PathBuf::from("/srv/exchanges.json"));
        assert_eq!(config.greeting, "Welcome back");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_unset_keeps_defaults() {
        let config = BotConfig::builder().with_vars(vars(&[])).build();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn test_empty_env_data_path_rejected() {
        let config = BotConfig::builder()
            .with_vars(vars(&[("STOCKBOT_DATA", "")]))
            .build();
        assert!(matches!(config.validate(), Err(StockBotError::Config(_))));
    }

    #[test]
    fn test_explicit_setter_overrides_empty_env_value() {
        let config = BotConfig::builder()
            .with_vars(vars(&[("STOCKBOT_DATA", "")]))
            .data_path("stock_data.json")
            .build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_placeholder() {
        let config = BotConfig::builder().placeholder("   ").build();
        assert!(matches!(config.validate(), Err(StockBotError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_data_path() {
        let config = BotConfig::builder().data_path("").build();
        assert!(config.validate().is_err());
    }
}
