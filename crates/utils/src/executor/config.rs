//! Configuration for safe execution behavior.

use serde::{Deserialize, Serialize};
use std::path::Path;
use verdict_core::{
    Error, Result, VERDICT_CAPTURE_PANICS_VAR, VERDICT_LOG_LIFECYCLE_VAR,
    VERDICT_PREFIX_DESCRIPTION_VAR,
};

/// Configuration for a [`TracingExecutor`](super::TracingExecutor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Emit start and completion events for every action
    pub log_lifecycle: bool,
    /// Convert a panicking action into a failure instead of unwinding
    pub capture_panics: bool,
    /// Prefix failure text with "<description> failed: "
    pub prefix_description: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            log_lifecycle: true,
            capture_panics: false,
            prefix_description: true,
        }
    }
}

impl ExecutorConfig {
    /// Config that never lets a panic escape an action
    pub fn capturing_panics() -> Self {
        Self {
            capture_panics: true,
            ..Self::default()
        }
    }

    /// Parse a config from JSON; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read config", e))?;
        Self::from_json_str(&contents)
    }

    /// Defaults overlaid with any `VERDICT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `VERDICT_*` environment variables on top of this config
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(value) = env_flag(VERDICT_LOG_LIFECYCLE_VAR)? {
            self.log_lifecycle = value;
        }
        if let Some(value) = env_flag(VERDICT_CAPTURE_PANICS_VAR)? {
            self.capture_panics = value;
        }
        if let Some(value) = env_flag(VERDICT_PREFIX_DESCRIPTION_VAR)? {
            self.prefix_description = value;
        }
        Ok(self)
    }
}

fn env_flag(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw)
            .map(Some)
            .ok_or_else(|| Error::configuration(format!("{name} must be a boolean, got '{raw}'"))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(Error::configuration(format!(
            "{name} is not valid unicode"
        ))),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
