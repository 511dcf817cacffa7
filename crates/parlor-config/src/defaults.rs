//! Environment variable names and fallback values for server configuration.

/// Listen address for the API.
pub const ENV_BIND_ADDR: &str = "PARLOR_BIND_ADDR";
/// Fallback log level when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "PARLOR_LOG_LEVEL";
/// Log output format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "PARLOR_LOG_FORMAT";
/// Base URL of the blob store API.
pub const ENV_BLOB_API_URL: &str = "BLOB_API_URL";
/// Blob store API version header value.
pub const ENV_BLOB_API_VERSION: &str = "BLOB_API_VERSION";
/// Host suffix that deletion targets must live under.
pub const ENV_BLOB_ALLOWED_HOST: &str = "BLOB_ALLOWED_HOST";
/// Timeout applied to blob store calls.
pub const ENV_BLOB_REQUEST_TIMEOUT_SECS: &str = "BLOB_REQUEST_TIMEOUT_SECS";
/// Write credential for the blob store.
pub const ENV_BLOB_READ_WRITE_TOKEN: &str = "BLOB_READ_WRITE_TOKEN";

pub(crate) const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";
pub(crate) const DEFAULT_BLOB_API_URL: &str = "https://blob.vercel-storage.com";
pub(crate) const DEFAULT_BLOB_API_VERSION: &str = "7";
pub(crate) const DEFAULT_BLOB_ALLOWED_HOST: &str = "blob.vercel-storage.com";
pub(crate) const DEFAULT_BLOB_REQUEST_TIMEOUT_SECS: u64 = 30;
