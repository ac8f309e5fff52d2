//! Configuration loading
//!
//! This module provides:
//! - `ModelConfig` - The hosted model every agent definition is bound to
//! - `Config` - Full application configuration loaded from config.toml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::swarm::RoutingPolicy;

/// Default hosted model for all agents
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-5-sonnet-20240620-v1:0";

/// Environment variable overriding `model.model_id`
pub const MODEL_ID_ENV: &str = "ASL_MODEL_ID";

/// Environment variable overriding `orchestrator.endpoint`
pub const ORCHESTRATOR_URL_ENV: &str = "SWARM_ORCHESTRATOR_URL";

/// Model binding shared by the coordinator and every specialist.
///
/// Passed explicitly into the agent factories; there is no process-wide
/// model object.
///
/// # Example
///
/// ```
/// use asl_swarm::ModelConfig;
///
/// let model = ModelConfig::new("anthropic.claude-3-haiku-20240307-v1:0");
/// assert_eq!(model.model_id, "anthropic.claude-3-haiku-20240307-v1:0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub model_id: String,
}

impl ModelConfig {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_ID)
    }
}

/// Main configuration structure loaded from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub routing: RoutingPolicy,
    pub server: ServerConfig,
    pub orchestrator: OrchestratorConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment overrides using the given lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model_id) = lookup(MODEL_ID_ENV).filter(|v| !v.is_empty()) {
            self.model.model_id = model_id;
        }
        if let Some(endpoint) = lookup(ORCHESTRATOR_URL_ENV).filter(|v| !v.is_empty()) {
            self.orchestrator.endpoint = Some(endpoint);
        }
        self
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Get the config directory path (~/.config/asl-swarm)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("asl-swarm"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the runtime HTTP surface binds to
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

/// External swarm service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Base URL of the swarm service (required to serve requests)
    pub endpoint: Option<String>,
    /// Client-side timeout for one swarm run
    pub timeout_secs: u64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 300,
        }
    }
}
