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
//! Parlor web client helpers.
//!
//! Holds the DOM-free auth primitives plus the storage-backed header provider
//! and, on wasm, the REST client for the image endpoints.

pub mod auth;
pub mod logic;
pub mod services;

pub use auth::{AuthHeaders, TokenStatus};
pub use services::auth_headers::{ACCESS_TOKEN_KEY, AuthHeaderProvider, get_auth_headers};
pub use services::storage::{KeyValueStore, MemoryStore, StorageError};
