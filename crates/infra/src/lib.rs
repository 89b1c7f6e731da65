//! # tootbatch infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest-backed dispatcher and credential adapters
//! - JSON-backed parameter resolution for input items
//! - Configuration loading from the environment and files
//! - Logging setup
//!
//! ## Architecture
//! - Implements traits defined in `tootbatch-core`
//! - Contains all "impure" code (network, filesystem, process environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod params;

pub use api::{
    MastodonCredentialVerifier, MastodonDispatcher, StaticCredentialProvider, TransportError,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::{init_tracing, LogFormat};
pub use params::ItemParameterResolver;
