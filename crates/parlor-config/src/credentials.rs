//! Request-time lookup of the blob store write credential.
//!
//! # Design
//! - The credential is never cached; every lookup reflects the current source.
//! - Blank values are treated as absent so misconfiguration surfaces early.

use std::sync::Arc;

use tracing::debug;

use crate::defaults::ENV_BLOB_READ_WRITE_TOKEN;

/// Capability that yields the blob store write credential on demand.
pub trait CredentialSource: Send + Sync {
    /// Current write credential, or `None` when it is not configured.
    fn blob_token(&self) -> Option<String>;
}

/// Shared reference to a credential source.
pub type SharedCredentials = Arc<dyn CredentialSource>;

/// Reads `BLOB_READ_WRITE_TOKEN` from the process environment on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn blob_token(&self) -> Option<String> {
        token_from(|name| std::env::var(name).ok())
    }
}

fn token_from<F>(lookup: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    let token = normalise(lookup(ENV_BLOB_READ_WRITE_TOKEN));
    if token.is_none() {
        debug!(variable = ENV_BLOB_READ_WRITE_TOKEN, "blob credential not set");
    }
    token
}

/// Fixed credential, used for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    /// Source that always yields the supplied token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: normalise(Some(token.into())),
        }
    }

    /// Source that never yields a token.
    #[must_use]
    pub const fn missing() -> Self {
        Self { token: None }
    }
}

impl CredentialSource for StaticCredentials {
    fn blob_token(&self) -> Option<String> {
        self.token.clone()
    }
}

fn normalise(value: Option<String>) -> Option<String> {
    value
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
