//! Configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_INSTANCE_URL;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub instance: InstanceConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Instance credentials: where to send requests and which token to send
#[derive(Clone, Serialize, Deserialize)]
pub struct InstanceConfig {
    #[serde(default = "default_instance_url")]
    pub url: String,
    pub access_token: String,
}

impl std::fmt::Debug for InstanceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceConfig")
            .field("url", &self.url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

fn default_instance_url() -> String {
    DEFAULT_INSTANCE_URL.to_string()
}

/// HTTP transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_seconds: default_timeout_seconds(), user_agent: None }
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Batch execution policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Record per-item failures as error records instead of aborting
    #[serde(default)]
    pub continue_on_failure: bool,
}
