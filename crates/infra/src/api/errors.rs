//! Transport-level error types
//!
//! Classifies HTTP failures so callers can tell an authentication problem
//! from a server outage, then collapses them into the domain's
//! [`TootError::Transport`] for the batch executor.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tootbatch_domain::TootError;

/// Categories of transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorCategory {
    /// 401, 403
    Authentication,
    /// 429
    RateLimit,
    /// 5xx
    Server,
    /// Other 4xx
    Client,
    /// Connection, DNS, reset, timeout
    Network,
    /// Response body was not JSON
    Decode,
    /// Request could not be constructed
    Config,
}

/// HTTP transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Config(String),
}

impl TransportError {
    pub fn category(&self) -> TransportErrorCategory {
        match self {
            Self::Auth(_) => TransportErrorCategory::Authentication,
            Self::RateLimit(_) => TransportErrorCategory::RateLimit,
            Self::Server(_) => TransportErrorCategory::Server,
            Self::Client(_) => TransportErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => TransportErrorCategory::Network,
            Self::Decode(_) => TransportErrorCategory::Decode,
            Self::Config(_) => TransportErrorCategory::Config,
        }
    }

    /// Classify a non-success response.
    pub fn from_status(status: StatusCode, url: &str, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("{} returned status {}", url, status)
        } else {
            format!("{} returned status {}: {}", url, status, body)
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimit(message)
        } else if status.is_server_error() {
            Self::Server(message)
        } else if status.is_client_error() {
            Self::Client(message)
        } else {
            Self::Network(message)
        }
    }
}

impl From<TransportError> for TootError {
    fn from(err: TransportError) -> Self {
        TootError::Transport(err.to_string())
    }
}
