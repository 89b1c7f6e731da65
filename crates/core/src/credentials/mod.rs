//! Instance credentials

pub mod ports;

pub use ports::{CredentialProvider, CredentialVerifier};
