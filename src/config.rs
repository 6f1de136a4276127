//! Configuration for reaching the classification service.

use crate::error::{ClassifyError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// The original service listens on port 5000.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENDPOINT_ENV: &str = "PETLENS_ENDPOINT";
const TIMEOUT_ENV: &str = "PETLENS_TIMEOUT_SECS";

/// Where and how to reach the predict endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Resolve configuration following the priority order:
    /// 1. Command-line arguments (highest priority)
    /// 2. Environment variables
    /// 3. TOML config file
    /// 4. Compiled defaults (fallback)
    pub fn resolve(
        cli_endpoint: Option<&str>,
        cli_timeout_secs: Option<u64>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        if let Ok(secs) = std::env::var(TIMEOUT_ENV) {
            config.timeout_secs = secs.parse().map_err(|_| {
                ClassifyError::Config(format!("{} must be an integer, got {:?}", TIMEOUT_ENV, secs))
            })?;
        }

        if let Some(endpoint) = cli_endpoint {
            config.endpoint = endpoint.to_string();
        }
        if let Some(secs) = cli_timeout_secs {
            config.timeout_secs = secs;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClassifyError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            ClassifyError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
