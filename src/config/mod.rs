// Greeter - Tiny stdin greeting function in Rust
// License: Apache-2.0

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("read_timeout_ms must be greater than zero")]
    ZeroTimeout,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// How long to wait for stdin before giving up on it.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
    /// Append the "from greeter X.Y.Z" annotation to the greeting.
    #[serde(default)]
    pub show_runtime: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_timeout_ms: default_read_timeout_ms(),
            show_runtime: false,
        }
    }
}

fn default_read_timeout_ms() -> u64 {
    250
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.read_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
