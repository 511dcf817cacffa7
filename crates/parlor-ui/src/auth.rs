//! Authentication primitives shared across the UI.
//!
//! # Design
//! - Keep token classification pure so it can be tested off the browser.
//! - Only the token's shape is checked; claims and expiry are never read.
//! - Header encoding lives here so every transport attaches the same value.

use parlor_api_models::{bearer_value, is_structurally_valid};
use serde::Serialize;

/// Header name carrying the bearer credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Classification of the value found under the access-token key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    /// Nothing (or an empty string) is stored.
    Missing,
    /// A value is stored but it is not a segmented token.
    Malformed {
        /// Length of the stored value in bytes.
        length: usize,
    },
    /// A structurally valid token.
    Valid(String),
}

impl TokenStatus {
    /// Classify a raw stored value.
    #[must_use]
    pub fn classify(stored: Option<String>) -> Self {
        match stored {
            None => Self::Missing,
            Some(token) if token.is_empty() => Self::Missing,
            Some(token) if is_structurally_valid(&token) => Self::Valid(token),
            Some(token) => Self::Malformed {
                length: token.len(),
            },
        }
    }

    /// The token, when it is usable.
    #[must_use]
    pub fn into_token(self) -> Option<String> {
        match self {
            Self::Valid(token) => Some(token),
            Self::Missing | Self::Malformed { .. } => None,
        }
    }
}

/// Header mapping attached to authenticated requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthHeaders {
    #[serde(rename = "Authorization")]
    authorization: String,
}

impl AuthHeaders {
    /// Headers carrying `token` under the bearer scheme.
    #[must_use]
    pub fn bearer(token: &str) -> Self {
        Self {
            authorization: bearer_value(token),
        }
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub const fn authorization(&self) -> &str {
        self.authorization.as_str()
    }

    /// Header name/value pairs, ready to hand to a request builder.
    #[must_use]
    pub const fn pairs(&self) -> [(&'static str, &str); 1] {
        [(AUTHORIZATION_HEADER, self.authorization.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_distinguishes_missing_malformed_and_valid() {
        assert_eq!(TokenStatus::classify(None), TokenStatus::Missing);
        assert_eq!(TokenStatus::classify(Some(String::new())), TokenStatus::Missing);
        assert_eq!(
            TokenStatus::classify(Some("abcdef".to_string())),
            TokenStatus::Malformed { length: 6 }
        );
        assert_eq!(
            TokenStatus::classify(Some("a.b.c".to_string())),
            TokenStatus::Valid("a.b.c".to_string())
        );
    }

    #[test]
    fn only_valid_tokens_are_usable() {
        assert_eq!(TokenStatus::Missing.into_token(), None);
        assert_eq!(TokenStatus::Malformed { length: 3 }.into_token(), None);
        assert_eq!(
            TokenStatus::Valid("a.b".to_string()).into_token().as_deref(),
            Some("a.b")
        );
    }

    #[test]
    fn headers_serialize_as_authorization_mapping() -> anyhow::Result<()> {
        let headers = AuthHeaders::bearer("a.b.c");
        assert_eq!(headers.authorization(), "Bearer a.b.c");
        assert_eq!(headers.pairs(), [("Authorization", "Bearer a.b.c")]);
        assert_eq!(
            serde_json::to_value(&headers)?,
            serde_json::json!({ "Authorization": "Bearer a.b.c" })
        );
        Ok(())
    }
}
