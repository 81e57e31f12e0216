//! Logging configuration

use serde::{Deserialize, Serialize};

/// Default filter directive when neither `RUST_LOG` nor an explicit filter is set
pub const DEFAULT_FILTER: &str = "warn,stockbot_core=info";

/// Logging configuration shared by the workspace binaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `warn,stockbot_core=debug`
    pub filter: String,
    /// Emit logs as JSON lines instead of the human readable format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Override the filter directive
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Switch JSON output on or off
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Take the filter from `RUST_LOG` when it is set and non-empty
    pub fn from_env() -> Self {
        match std::env::var("RUST_LOG") {
            Ok(filter) if !filter.trim().is_empty() => Self::default().with_filter(filter),
            _ => Self::default(),
        }
    }
}
