//! API constants
//!
//! Endpoint paths and parameter bounds shared by the request builder and the
//! parameter schema.

pub const DEFAULT_INSTANCE_URL: &str = "https://mastodon.social";

// Endpoints (appended to the instance base URL)
pub const STATUSES_PATH: &str = "/api/v1/statuses";
pub const ACCOUNTS_PATH: &str = "/api/v1/accounts";
pub const NOTIFICATIONS_PATH: &str = "/api/v1/notifications";
pub const VERIFY_CREDENTIALS_PATH: &str = "/api/v1/accounts/verify_credentials";

// Page size for list endpoints
pub const DEFAULT_LIMIT: u32 = 40;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 80;

// Query keys
pub const LIMIT_QUERY_KEY: &str = "limit";
pub const EXCLUDE_TYPES_QUERY_KEY: &str = "exclude_types[]";
