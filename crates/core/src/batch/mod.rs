//! Batch execution
//!
//! This module provides the per-item pipeline (resolve, build, dispatch,
//! normalize) and the policy deciding whether a failed item aborts the batch.

pub mod executor;
pub mod normalizer;
pub mod policy;

pub use executor::{BatchExecutor, BatchRequest};
pub use normalizer::normalize;
pub use policy::{BatchAccumulator, BatchOutcome, FailurePolicy, ItemFailure};
