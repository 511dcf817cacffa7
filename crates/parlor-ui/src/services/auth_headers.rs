//! Builds the `Authorization` header from the persisted access token.
//!
//! # Design
//! - Without reachable browser storage the provider reports absence, not an error.
//! - Storage is only read here; the token is never written or cleared.
//! - Diagnostics carry the token length at most.

use std::fmt;

use crate::auth::{AuthHeaders, TokenStatus};
use crate::services::diagnostics;
use crate::services::storage::{KeyValueStore, browser_store};

/// Storage key the access token is persisted under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Reads the access token and turns it into request headers.
pub struct AuthHeaderProvider {
    store: Option<Box<dyn KeyValueStore>>,
}

impl AuthHeaderProvider {
    /// Provider reading from `store`.
    #[must_use]
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Some(Box::new(store)),
        }
    }

    /// Provider with no storage, as during server-side rendering.
    #[must_use]
    pub const fn without_storage() -> Self {
        Self { store: None }
    }

    /// Provider over the browser's `localStorage`, or without storage when none is reachable.
    #[must_use]
    pub fn browser() -> Self {
        Self {
            store: browser_store(),
        }
    }

    /// Classify the stored token without emitting diagnostics.
    #[must_use]
    pub fn inspect_token(&self) -> TokenStatus {
        self.store
            .as_ref()
            .map_or(TokenStatus::Missing, |store| {
                TokenStatus::classify(store.get(ACCESS_TOKEN_KEY))
            })
    }

    /// Headers for an authenticated request, or `None` when no usable token is stored.
    ///
    /// Missing and malformed tokens both yield `None`; use
    /// [`inspect_token`](Self::inspect_token) to tell them apart.
    #[must_use]
    pub fn get_auth_headers(&self) -> Option<AuthHeaders> {
        if self.store.is_none() {
            return None;
        }
        match self.inspect_token() {
            TokenStatus::Missing => {
                diagnostics::token_missing();
                None
            }
            TokenStatus::Malformed { length } => {
                diagnostics::token_malformed(length);
                None
            }
            TokenStatus::Valid(token) => {
                diagnostics::token_attached(token.len());
                Some(AuthHeaders::bearer(&token))
            }
        }
    }
}

impl fmt::Debug for AuthHeaderProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeaderProvider")
            .field("has_store", &self.store.is_some())
            .finish_non_exhaustive()
    }
}

/// Headers built from the browser's stored access token.
#[must_use]
pub fn get_auth_headers() -> Option<AuthHeaders> {
    AuthHeaderProvider::browser().get_auth_headers()
}
