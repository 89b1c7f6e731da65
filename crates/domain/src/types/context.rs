//! Per-batch execution context

use std::fmt;

/// Instance base URL and access token, resolved once per batch and shared
/// read-only by every item.
#[derive(Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    base_url: String,
    access_token: String,
}

impl ExecutionContext {
    /// Trailing slashes are trimmed from `base_url` so paths can be appended
    /// verbatim.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, access_token: access_token.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Absolute URL for an API path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Value of the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
