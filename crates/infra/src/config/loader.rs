//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required variable is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DOPPLER_API_BASE_URL`: Doppler REST API base URL (required)
//! - `DOPPLER_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `DOPPLER_API_USER_AGENT`: User agent sent with every request
//! - `DOPPLER_STATIC_DATA_BASE_URL`: Static data service base URL
//! - `DOPPLER_LOG_LEVEL`: Tracing filter directive
//! - `DOPPLER_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./doppler.json` or `./doppler.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use doppler_domain::{
    ApiConfig, Config, DopplerError, LoggingConfig, Result, StaticDataConfig,
    DEFAULT_STATIC_DATA_BASE_URL, DEFAULT_TIMEOUT_SECONDS,
};
use url::Url;

use crate::errors::InfraError;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DopplerError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A base URL is not an absolute `http(s)` URL
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `DOPPLER_API_BASE_URL` is required; everything else falls back to
/// the defaults in [`Config`].
///
/// # Errors
/// Returns `DopplerError::Config` if the base URL is missing or any value
/// is invalid.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("DOPPLER_API_BASE_URL")?;
    let timeout_seconds = match std::env::var("DOPPLER_API_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| DopplerError::Config(format!("Invalid request timeout: {}", e)))?,
        Err(_) => DEFAULT_TIMEOUT_SECONDS,
    };
    let user_agent = std::env::var("DOPPLER_API_USER_AGENT").ok();
    let static_base_url = std::env::var("DOPPLER_STATIC_DATA_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_STATIC_DATA_BASE_URL.to_string());

    let defaults = LoggingConfig::default();
    let logging = LoggingConfig {
        level: std::env::var("DOPPLER_LOG_LEVEL").unwrap_or(defaults.level),
        json: env_bool("DOPPLER_LOG_JSON", defaults.json),
    };

    let config = Config {
        api: ApiConfig { base_url, timeout_seconds, user_agent },
        static_data: StaticDataConfig { base_url: static_base_url },
        logging,
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DopplerError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DopplerError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DopplerError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DopplerError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(DopplerError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn validate(config: &Config) -> Result<()> {
    parse_base_url(&config.api.base_url)?;
    parse_base_url(&config.static_data.base_url)?;
    if config.api.timeout_seconds == 0 {
        return Err(DopplerError::Config("Request timeout must be positive".to_string()));
    }
    Ok(())
}

/// Parse a service base URL.
///
/// # Errors
/// Returns `DopplerError::Config` unless `raw` is an absolute `http` or
/// `https` URL that can carry a path.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(InfraError::from)?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(DopplerError::Config(format!("Unsupported base URL: {}", raw)));
    }
    Ok(url)
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./doppler.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("doppler.json"),
        dir.join("doppler.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `DopplerError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DopplerError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
