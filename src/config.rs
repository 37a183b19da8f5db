use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, STORE_APP_URL,
    WORKSHOP_ITEM_URL,
};
use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub steam: SteamConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SteamConfig {
    pub store_url: String,
    pub workshop_url: String,
    pub timeout_seconds: u64,
    /// Maximum in-flight fetches per directory level; 1 keeps the run strictly sequential.
    pub concurrency: usize,
    pub user_agent: String,
    pub on_error: FailurePolicy,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            store_url: STORE_APP_URL.to_string(),
            workshop_url: WORKSHOP_ITEM_URL.to_string(),
            timeout_seconds: 30,
            concurrency: 1,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            on_error: FailurePolicy::Abort,
        }
    }
}

impl SteamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub pretty: bool,
    /// Rewrite the output file after every completed game.
    pub incremental: bool,
    /// Where to write the end-of-run counters in Prometheus text format.
    pub metrics_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            pretty: false,
            incremental: false,
            metrics_path: None,
        }
    }
}

/// What to do when fetching or reading a single game/mod page fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run on the first failure.
    #[default]
    Abort,
    /// Log the failure and leave the entity out, like a not-found page.
    Skip,
}

impl FromStr for FailurePolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            other => Err(CatalogError::Config(format!(
                "unknown failure policy '{}' (expected 'abort' or 'skip')",
                other
            ))),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => f.write_str("abort"),
            FailurePolicy::Skip => f.write_str("skip"),
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the default file if it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.steam.concurrency == 0 {
            return Err(CatalogError::Config(
                "steam.concurrency must be at least 1".to_string(),
            ));
        }
        if self.steam.timeout_seconds == 0 {
            return Err(CatalogError::Config(
                "steam.timeout_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
