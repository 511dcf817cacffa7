//! Browser-facing services: storage access, auth headers, and REST calls.

/// Access-token header provider.
pub mod auth_headers;
pub(crate) mod diagnostics;
/// Key/value storage capability and its implementations.
pub mod storage;

/// REST client for the Parlor API.
#[cfg(target_arch = "wasm32")]
pub mod api;
