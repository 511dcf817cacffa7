//! HTTP surface modules (router, handlers, middleware).

/// Shared constants and header names.
pub mod constants;
/// Authorization header diagnostics.
pub mod debug;
/// Error payloads and the handler error type.
pub mod errors;
/// Health and metrics endpoints.
pub mod health;
/// Image deletion against the blob store.
pub mod images;
/// Request identifier layers and lookup.
pub mod request_id;
/// Router construction and server host.
pub mod router;
/// Metrics middleware for HTTP requests.
pub mod telemetry;
