//! Port interfaces for instance credentials

use async_trait::async_trait;
use serde_json::Value;
use tootbatch_domain::{ExecutionContext, Result};

/// Supplies the instance URL and access token for a batch
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Resolve the execution context. Called once per batch.
    async fn execution_context(&self) -> Result<ExecutionContext>;
}

/// Out-of-band connectivity check for a set of credentials
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify the credentials, returning the authenticated account.
    ///
    /// Any non-success response is reported as
    /// [`tootbatch_domain::TootError::Auth`].
    async fn verify(&self, context: &ExecutionContext) -> Result<Value>;
}
