//! Mastodon API adapters
//!
//! Implements the core ports over HTTP: request dispatch and credentials.

pub mod credentials;
pub mod dispatcher;
pub mod errors;

pub use credentials::{MastodonCredentialVerifier, StaticCredentialProvider};
pub use dispatcher::MastodonDispatcher;
pub use errors::{TransportError, TransportErrorCategory};
