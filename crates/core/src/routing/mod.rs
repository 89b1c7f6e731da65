//! Resource/operation routing

pub mod builder;

pub use builder::RequestBuilder;
