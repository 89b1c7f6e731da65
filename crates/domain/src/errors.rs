//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for tootbatch
///
/// Every per-item failure surfaced by the batch executor is one of these
/// variants. The message is what ends up in an error-shaped output record.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TootError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported operation '{operation}' for resource '{resource}'")]
    UnsupportedOperation { resource: String, operation: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TootError {
    /// Build an [`TootError::UnsupportedOperation`] from raw names.
    pub fn unsupported(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation { resource: resource.into(), operation: operation.into() }
    }

    /// Stable label suitable for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::UnsupportedOperation { .. } => "unsupported_operation",
            Self::Transport(_) => "transport",
            Self::Config(_) => "config",
            Self::Auth(_) => "auth",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for tootbatch operations
pub type Result<T> = std::result::Result<T, TootError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_operation_names_both_sides() {
        let err = TootError::unsupported("status", "block");
        assert_eq!(err.to_string(), "Unsupported operation 'block' for resource 'status'");
        assert_eq!(err.kind(), "unsupported_operation");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(TootError::Transport("boom".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Transport", "message": "boom" }));
    }
}
