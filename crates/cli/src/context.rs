//! Application context - wires adapters from configuration

use std::path::PathBuf;
use std::sync::Arc;

use tootbatch_core::{BatchExecutor, CredentialProvider, CredentialVerifier, FailurePolicy};
use tootbatch_domain::{Config, Result};
use tootbatch_infra::{
    config, HttpClient, MastodonCredentialVerifier, MastodonDispatcher, StaticCredentialProvider,
};
use tracing::info;

/// Holds the configuration and the services built from it
pub struct AppContext {
    pub config: Config,
    pub executor: BatchExecutor,
    pub credentials: Arc<dyn CredentialProvider>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppContext {
    /// Load configuration from `path`, or from the environment and standard
    /// locations when `path` is `None`.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config = match path {
            Some(path) => config::load_from_file(Some(path))?,
            None => config::load()?,
        };
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let http = HttpClient::from_config(&config.http)?;
        let credentials: Arc<dyn CredentialProvider> =
            Arc::new(StaticCredentialProvider::from_config(&config.instance)?);
        let dispatcher = Arc::new(MastodonDispatcher::new(http.clone()));
        let verifier = Arc::new(MastodonCredentialVerifier::new(http));

        info!(instance = %config.instance.url, "application context ready");

        Ok(Self {
            executor: BatchExecutor::new(dispatcher, credentials.clone()),
            credentials,
            verifier,
            config,
        })
    }

    /// Failure policy from configuration, forced to continue when the
    /// command line asks for it.
    pub fn failure_policy(&self, continue_on_fail: bool) -> FailurePolicy {
        FailurePolicy::from_continue_flag(continue_on_fail || self.config.batch.continue_on_failure)
    }
}
