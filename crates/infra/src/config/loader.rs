//! Configuration loader
//!
//! Loads instance credentials and transport settings from environment
//! variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the access token is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TOOTBATCH_ACCESS_TOKEN`: Access token (required)
//! - `TOOTBATCH_INSTANCE_URL`: Instance base URL (default `https://mastodon.social`)
//! - `TOOTBATCH_HTTP_TIMEOUT`: Per-request timeout in seconds (default 30)
//! - `TOOTBATCH_USER_AGENT`: User-Agent header value
//! - `TOOTBATCH_CONTINUE_ON_FAIL`: Continue past item failures (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tootbatch.json` or `./tootbatch.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use tootbatch_domain::constants::DEFAULT_INSTANCE_URL;
use tootbatch_domain::{BatchConfig, Config, HttpConfig, InstanceConfig, Result, TootError};
use url::Url;

use crate::errors::InfraError;

pub const ACCESS_TOKEN_ENV: &str = "TOOTBATCH_ACCESS_TOKEN";
pub const INSTANCE_URL_ENV: &str = "TOOTBATCH_INSTANCE_URL";
pub const HTTP_TIMEOUT_ENV: &str = "TOOTBATCH_HTTP_TIMEOUT";
pub const USER_AGENT_ENV: &str = "TOOTBATCH_USER_AGENT";
pub const CONTINUE_ON_FAIL_ENV: &str = "TOOTBATCH_CONTINUE_ON_FAIL";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["tootbatch.json", "tootbatch.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// Loads from environment variables when the access token is set there;
/// otherwise falls back to loading from a config file.
///
/// # Errors
/// Returns `TootError::Config` if:
/// - The access token is set but another environment variable is invalid
/// - No config file is found when the access token is not set
/// - File format is invalid
/// - The instance URL is not an absolute http(s) URL
pub fn load() -> Result<Config> {
    if std::env::var_os(ACCESS_TOKEN_ENV).is_none() {
        tracing::debug!("{} not set, trying file", ACCESS_TOKEN_ENV);
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `TootError::Config` if `TOOTBATCH_ACCESS_TOKEN` is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let access_token = env_var(ACCESS_TOKEN_ENV)?;
    let url = std::env::var(INSTANCE_URL_ENV).unwrap_or_else(|_| DEFAULT_INSTANCE_URL.to_string());

    let timeout_seconds = match std::env::var(HTTP_TIMEOUT_ENV) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| TootError::Config(format!("Invalid HTTP timeout: {}", e)))?,
        Err(_) => HttpConfig::default().timeout_seconds,
    };
    let user_agent = std::env::var(USER_AGENT_ENV).ok().filter(|agent| !agent.is_empty());

    let config = Config {
        instance: InstanceConfig { url, access_token },
        http: HttpConfig { timeout_seconds, user_agent },
        batch: BatchConfig { continue_on_failure: env_bool(CONTINUE_ON_FAIL_ENV, false) },
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
/// Returns `TootError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TootError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TootError::Config(format!(
                "No config file found in any of the standard locations and {} is not set",
                ACCESS_TOKEN_ENV
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TootError::Config(format!("Failed to read config file: {}", e)))?;

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
        "toml" => toml::from_str(contents)
            .map_err(|e| TootError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TootError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TootError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject configurations that could never produce a working request.
fn validate(config: &Config) -> Result<()> {
    let url = Url::parse(&config.instance.url).map_err(|e| TootError::from(InfraError::from(e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TootError::Config(format!(
            "instance URL must use http or https: {}",
            config.instance.url
        )));
    }

    if config.instance.access_token.trim().is_empty() {
        return Err(TootError::Config("access token must not be empty".into()));
    }

    if config.http.timeout_seconds == 0 {
        return Err(TootError::Config("HTTP timeout must be at least one second".into()));
    }

    Ok(())
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory first, then the directory holding
/// the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `TootError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| TootError::Config(format!("Missing required environment variable: {}", key)))
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
