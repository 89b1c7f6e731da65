//! Domain types and models

pub mod context;
pub mod operation;
pub mod record;
pub mod request;

pub use context::ExecutionContext;
pub use operation::{NotificationType, Operation, Resource, ResourceOperation, Route, Visibility};
pub use record::{Item, OutputRecord, PairedItem};
pub use request::{HttpMethod, Query, QueryValue, RequestSpec};
