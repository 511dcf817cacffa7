//! Errors raised while hosting the API.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Result alias for API server operations.
pub type ApiServerResult<T> = Result<T, ApiServerError>;

/// Listener and serve-loop failures. Handler errors never reach this type.
#[derive(Debug, Error)]
pub enum ApiServerError {
    /// The listener could not be bound.
    #[error("failed to bind api listener")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Source IO error.
        source: io::Error,
    },
    /// The serve loop exited with an error.
    #[error("api server terminated unexpectedly")]
    Serve {
        /// Source IO error.
        source: io::Error,
    },
}
