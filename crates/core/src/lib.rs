//! # tootbatch Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The request builder and parameter schema
//! - Port interfaces (traits) for dispatch, parameters and credentials
//! - The response normalizer and batch executor
//!
//! ## Architecture Principles
//! - Only depends on `tootbatch-domain`
//! - No HTTP or file-system code
//! - All external dependencies via traits

pub mod batch;
pub mod credentials;
pub mod dispatch;
pub mod params;
pub mod routing;

#[cfg(test)]
mod test_support;

// Re-export specific items to avoid ambiguity
pub use batch::{
    normalize, BatchExecutor, BatchOutcome, BatchRequest, FailurePolicy, ItemFailure,
};
pub use credentials::{CredentialProvider, CredentialVerifier};
pub use dispatch::Dispatcher;
pub use params::{
    FieldKind, FieldSpec, ParamValue, ParameterResolver, ParameterSchema, ResolvedParams,
};
pub use routing::RequestBuilder;
