//! Configuration structures
//!
//! Loaded by `doppler_infra::config` from the environment or a JSON/TOML file.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://restapi.fromdoppler.com";
pub const DEFAULT_STATIC_DATA_BASE_URL: &str = "https://cdn.fromdoppler.com/static-data";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub static_data: StaticDataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Doppler REST API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
        }
    }
}

/// Static data service (consumer types and other catalogues)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDataConfig {
    pub base_url: String,
}

impl Default for StaticDataConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_STATIC_DATA_BASE_URL.to_string() }
    }
}

/// Tracing output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `doppler_infra=debug`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}
