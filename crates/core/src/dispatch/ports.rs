//! Port interface for issuing API requests

use async_trait::async_trait;
use serde_json::Value;
use tootbatch_domain::{ExecutionContext, RequestSpec, Result};

/// Issues one HTTP call per request specification.
///
/// Implementations attach the bearer token from `context`, send the request
/// once (no retry) and return the parsed JSON body. Non-success statuses and
/// network failures are reported as [`tootbatch_domain::TootError::Transport`].
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn send(&self, context: &ExecutionContext, spec: &RequestSpec) -> Result<Value>;
}
