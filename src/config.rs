use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "SELLER_CONSOLE_CONFIG";
pub const BASE_URL_ENV: &str = "SELLER_CONSOLE_BASE_URL";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Remote backend. Without one the in-memory backend is used.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// Request channel capacity of each collection.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_buffer_size() -> usize {
    32
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("store.buffer_size must be at least 1")]
    ZeroBuffer,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
timeout_secs = 30

[store]
buffer_size = 32
"#;

impl ConsoleConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ConsoleConfig = toml::from_str(contents)?;
        if config.store.buffer_size == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// A non-blank `base_url` replaces the configured one.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = Some(url.trim().to_string());
        }
        self
    }
}

/// Load configuration from a TOML file
///
/// Search order:
/// 1. `$SELLER_CONSOLE_CONFIG`
/// 2. `config.toml` next to the executable
/// 3. Embedded default config
///
/// `$SELLER_CONSOLE_BASE_URL` then overrides `api.base_url`.
pub fn load_config() -> Result<ConsoleConfig, ConfigError> {
    let config = match locate_config() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            ConsoleConfig::from_file(&path)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            ConsoleConfig::from_toml(DEFAULT_CONFIG)?
        }
    };
    Ok(config.with_base_url(std::env::var(BASE_URL_ENV).ok()))
}

fn locate_config() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}
