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

//! Environment-backed configuration for the Parlor server.
//!
//! Layout: `model.rs` (typed server settings), `credentials.rs` (request-time
//! secret lookup), `defaults.rs` (fallback values), `error.rs` (`ConfigError`).

pub mod credentials;
pub mod defaults;
pub mod error;
pub mod model;

pub use credentials::{CredentialSource, EnvCredentials, SharedCredentials, StaticCredentials};
pub use error::{ConfigError, ConfigResult};
pub use model::{BlobSettings, ServerConfig};
