//! Configuration loading and management.
//!
//! Loads configuration from `./quickchat.toml` (or `$QUICKCHAT_CONFIG_PATH`).
//! Environment variables override file values; file values override defaults.
//!
//! Precedence: env vars > config file > defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default durable-log filename when nothing else is configured.
const DEFAULT_STORE_PATH: &str = "messages.json";

/// Default tracing filter when `RUST_LOG` and the config file are silent.
const DEFAULT_LOG_FILTER: &str = "info";

/// Top-level quickchat configuration loaded from TOML.
///
/// Path: `./quickchat.toml` or `$QUICKCHAT_CONFIG_PATH`.
/// Env vars override file values; file values override defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuickchatConfig {
    /// Durable message log settings (`[store]`).
    pub store: StoreConfig,
    /// Logging settings (`[log]`).
    pub log: LogConfig,
}

/// Durable message log settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON array log file.
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_owned(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl QuickchatConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// Config file path: `$QUICKCHAT_CONFIG_PATH` or `./quickchat.toml`.
    /// If the file does not exist, returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from TOML file only, no env overrides.
    fn load_from_file() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config from file");
                let config: QuickchatConfig =
                    toml::from_str(&contents).context("failed to parse config TOML")?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(QuickchatConfig::default()),
            Err(e) => Err(anyhow::anyhow!("failed to read config file: {e}")),
        }
    }

    /// Resolve config path using a custom env resolver (for testing).
    ///
    /// Checks `$QUICKCHAT_CONFIG_PATH` first, then `./quickchat.toml` in the
    /// working directory.
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(p) = env("QUICKCHAT_CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("quickchat.toml")
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability (avoids `set_var` in tests).
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("QUICKCHAT_STORE_PATH") {
            self.store.path = v;
        }
        if let Some(v) = env("QUICKCHAT_LOG_FILTER") {
            self.log.filter = v;
        }
    }
}
