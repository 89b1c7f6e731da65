//! Parameter schema and resolution

pub mod ports;
pub mod schema;

pub use ports::ParameterResolver;
pub use schema::{FieldKind, FieldSpec, ParamValue, ParameterSchema, ResolvedParams};
