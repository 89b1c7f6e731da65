//! Instance credentials
//!
//! [`StaticCredentialProvider`] hands out the configured instance URL and
//! token. [`MastodonCredentialVerifier`] checks a token against the
//! instance's verify-credentials endpoint.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde_json::Value;
use tootbatch_core::{CredentialProvider, CredentialVerifier};
use tootbatch_domain::constants::VERIFY_CREDENTIALS_PATH;
use tootbatch_domain::{ExecutionContext, InstanceConfig, Result, TootError};
use tracing::{debug, info, instrument};
use url::Url;

use super::dispatcher::read_json;
use super::errors::TransportError;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Credential provider for a single configured instance
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    context: ExecutionContext,
}

impl StaticCredentialProvider {
    /// Validates that `url` is an absolute http(s) URL and that the token is
    /// non-empty.
    pub fn new(url: &str, access_token: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| TootError::from(InfraError::from(e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TootError::Config(format!(
                "instance URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if access_token.trim().is_empty() {
            return Err(TootError::Auth("access token is empty".into()));
        }

        Ok(Self { context: ExecutionContext::new(url, access_token) })
    }

    pub fn from_config(config: &InstanceConfig) -> Result<Self> {
        Self::new(&config.url, &config.access_token)
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn execution_context(&self) -> Result<ExecutionContext> {
        Ok(self.context.clone())
    }
}

/// Verifies a token by calling `GET /api/v1/accounts/verify_credentials`
#[derive(Clone)]
pub struct MastodonCredentialVerifier {
    http: HttpClient,
}

impl MastodonCredentialVerifier {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CredentialVerifier for MastodonCredentialVerifier {
    #[instrument(skip_all, fields(instance = %context.base_url()))]
    async fn verify(&self, context: &ExecutionContext) -> Result<Value> {
        let url = context.url_for(VERIFY_CREDENTIALS_PATH);
        debug!("verifying credentials");

        let request =
            self.http.request(Method::GET, &url).header(AUTHORIZATION, context.bearer());
        let response = self.http.send(request).await?;

        match read_json(response, &url).await {
            Ok(account) => {
                let acct = account.get("acct").and_then(Value::as_str).unwrap_or_default();
                info!(account = acct, "credentials verified");
                Ok(account)
            }
            Err(TransportError::Decode(msg)) => Err(TootError::Transport(msg)),
            Err(err) => Err(TootError::Auth(err.to_string())),
        }
    }
}
