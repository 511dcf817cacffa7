//! Shared HTTP constants (headers, routes).

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";
pub(crate) const HEALTH_PATH: &str = "/health";
pub(crate) const METRICS_PATH: &str = "/metrics";
pub(crate) const ALLOWED_BLOB_SCHEME: &str = "https";
