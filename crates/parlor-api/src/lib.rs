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

//! HTTP surface for Parlor: image deletion against the blob store, auth
//! header diagnostics, health and metrics.
//!
//! Layout: `blob.rs` (remote blob store client), `state.rs` (shared request
//! state), `http/` (router, handlers, middleware), `error.rs` (server errors).

pub mod blob;
pub mod error;
pub mod http;
pub(crate) mod state;

pub use blob::{BlobStore, BlobStoreError, HttpBlobStore, SharedBlobStore};
pub use error::{ApiServerError, ApiServerResult};
pub use http::router::{ApiDependencies, ApiServer};
