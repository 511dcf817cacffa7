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
//! Shared HTTP DTOs for the Parlor API.
//!
//! The server renders these payloads and the browser client decodes them, so
//! both sides agree on one wire contract. The structural bearer token check
//! lives here for the same reason.

pub mod token;

use serde::{Deserialize, Serialize};

pub use token::{BEARER_PREFIX, TOKEN_SEGMENT_SEPARATOR, bearer_value, is_structurally_valid};

/// Route serving image deletions.
pub const IMAGES_PATH: &str = "/api/images";
/// Route serving the authorization header diagnostics.
pub const AUTH_DEBUG_PATH: &str = "/api/debug/auth";

/// Message returned when an image is deleted.
pub const MSG_IMAGE_DELETED: &str = "Image deleted successfully";
/// Message returned when the `url` parameter is missing.
pub const MSG_URL_REQUIRED: &str = "Image URL is required";
/// Message returned when the `url` parameter is not a blob store URL.
pub const MSG_URL_INVALID: &str = "Invalid image URL";
/// Message returned when the blob store credential is not configured.
pub const MSG_STORAGE_UNCONFIGURED: &str = "Blob storage is not configured";
/// Message returned when the blob store call fails.
pub const MSG_DELETE_FAILED: &str = "Failed to delete image";

/// Query string accepted by `DELETE /api/images`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteImageQuery {
    /// Blob URL of the image to delete.
    #[serde(default)]
    pub url: Option<String>,
}

/// Success payload for `DELETE /api/images`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteImageResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

impl DeleteImageResponse {
    /// Canonical success payload.
    #[must_use]
    pub fn deleted() -> Self {
        Self {
            success: true,
            message: MSG_IMAGE_DELETED.to_string(),
        }
    }
}

/// Error payload returned by every API failure path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable error message, never carrying upstream detail.
    pub error: String,
}

/// Report on the `Authorization` header a caller sent.
///
/// The token itself is never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthDebugResponse {
    /// Whether an `Authorization` header was present.
    pub present: bool,
    /// Authentication scheme, e.g. `Bearer`.
    pub scheme: Option<String>,
    /// Length of the credential following the scheme.
    pub token_length: Option<usize>,
    /// Whether the credential passes the structural token check.
    pub structurally_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delete_response_matches_wire_contract() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(DeleteImageResponse::deleted())?;
        assert_eq!(
            value,
            json!({"success": true, "message": "Image deleted successfully"})
        );
        Ok(())
    }

    #[test]
    fn delete_query_tolerates_missing_url() -> Result<(), serde_json::Error> {
        let query: DeleteImageQuery = serde_json::from_value(json!({}))?;
        assert!(query.url.is_none());
        Ok(())
    }

    #[test]
    fn error_response_is_a_single_field() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(ErrorResponse {
            error: MSG_DELETE_FAILED.to_string(),
        })?;
        assert_eq!(value, json!({"error": "Failed to delete image"}));
        Ok(())
    }
}
