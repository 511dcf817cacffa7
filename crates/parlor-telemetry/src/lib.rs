#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Telemetry primitives shared across the Parlor workspace.
//!
//! This crate centralises logging, metrics, and request tracing helpers so the
//! API server and the binary adopt a consistent observability story.

pub mod context;
pub mod error;
pub mod init;
pub mod metrics;

pub use context::{
    GlobalContextGuard, RequestContext, current_request, current_request_id, with_request_context,
};
pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
pub use metrics::{DeletionOutcome, Metrics, MetricsSnapshot};
