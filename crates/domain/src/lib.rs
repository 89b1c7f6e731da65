//! # tootbatch Domain
//!
//! Domain types and models for tootbatch.
//!
//! This crate contains:
//! - The resource/operation selection and its routing table
//! - Request specifications, input items and output records
//! - Domain error types and Result definitions
//! - Configuration structures and API constants
//!
//! ## Architecture
//! - No dependencies on other tootbatch crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
