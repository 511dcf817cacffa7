//! Image deletion against the external blob store.
//!
//! # Design
//! - Validation short-circuits before any remote call: presence, then host, then credential.
//! - The credential is looked up per request and never logged.
//! - Upstream failures are logged in full and collapsed into one generic message for callers.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use parlor_api_models::{
    DeleteImageQuery, DeleteImageResponse, MSG_DELETE_FAILED, MSG_STORAGE_UNCONFIGURED,
    MSG_URL_INVALID, MSG_URL_REQUIRED,
};
use parlor_telemetry::{DeletionOutcome, Metrics, current_request_id};
use tracing::{error, info, warn};
use url::Url;

use crate::http::constants::ALLOWED_BLOB_SCHEME;
use crate::http::errors::ApiError;
use crate::state::ApiState;

pub(crate) async fn delete_image(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<DeleteImageQuery>, QueryRejection>,
) -> Result<Json<DeleteImageResponse>, ApiError> {
    let request_id = current_request_id().unwrap_or_default();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "rejected malformed delete query");
            state.telemetry.inc_blob_deletion(DeletionOutcome::Rejected);
            return Err(ApiError::bad_request(MSG_URL_INVALID));
        }
    };

    let target = match validate_blob_url(query.url.as_deref(), &state.allowed_host) {
        Ok(target) => target,
        Err(err) => {
            state.telemetry.inc_blob_deletion(DeletionOutcome::Rejected);
            return Err(err);
        }
    };

    let Some(token) = state.credentials.blob_token() else {
        error!(request_id = %request_id, "blob storage credential is not configured");
        state
            .telemetry
            .inc_blob_deletion(DeletionOutcome::Unconfigured);
        return Err(ApiError::internal(MSG_STORAGE_UNCONFIGURED));
    };

    info!(request_id = %request_id, url = %target, "deleting image from blob store");
    match state.blob_store.delete(target, &token).await {
        Ok(()) => {
            state.telemetry.inc_blob_deletion(DeletionOutcome::Deleted);
            info!(request_id = %request_id, url = %target, "image deleted");
            Ok(Json(DeleteImageResponse::deleted()))
        }
        Err(err) => {
            error!(
                request_id = %request_id,
                url = %target,
                error = %err,
                detail = ?err,
                "failed to delete image from blob store"
            );
            state.telemetry.inc_blob_deletion(DeletionOutcome::Failed);
            Err(ApiError::internal(MSG_DELETE_FAILED))
        }
    }
}

/// Answer a panic raised while deleting with the generic failure body.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn delete_panicked(
    metrics: &Metrics,
    panic: Box<dyn Any + Send + 'static>,
) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(
        request_id = %current_request_id().unwrap_or_default(),
        detail,
        "image deletion panicked"
    );
    metrics.inc_blob_deletion(DeletionOutcome::Failed);
    ApiError::internal(MSG_DELETE_FAILED).into_response()
}

/// Check that `raw` names an object on the blob store and return it trimmed.
///
/// The URL must parse, use `https`, and its host must be `allowed_host` or a
/// subdomain of it. Mentioning the host anywhere else in the string is not enough.
pub(crate) fn validate_blob_url<'a>(
    raw: Option<&'a str>,
    allowed_host: &str,
) -> Result<&'a str, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        warn!("delete request is missing the url parameter");
        return Err(ApiError::bad_request(MSG_URL_REQUIRED));
    };

    let Ok(parsed) = Url::parse(raw) else {
        warn!(url = %raw, "delete target is not a valid URL");
        return Err(ApiError::bad_request(MSG_URL_INVALID));
    };

    let host_allowed = parsed.host_str().is_some_and(|host| {
        host == allowed_host
            || host
                .strip_suffix(allowed_host)
                .is_some_and(|prefix| prefix.ends_with('.'))
    });
    if parsed.scheme() != ALLOWED_BLOB_SCHEME || !host_allowed {
        warn!(url = %raw, allowed_host, "delete target is outside the blob store");
        return Err(ApiError::bad_request(MSG_URL_INVALID));
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    const HOST: &str = "blob.vercel-storage.com";

    #[test]
    fn accepts_store_subdomains_and_trims() -> anyhow::Result<()> {
        let target = validate_blob_url(
            Some("  https://abc123.public.blob.vercel-storage.com/cat.png "),
            HOST,
        )
        .map_err(|err| anyhow::anyhow!("unexpected rejection: {err:?}"))?;
        assert_eq!(target, "https://abc123.public.blob.vercel-storage.com/cat.png");

        assert!(validate_blob_url(Some("https://blob.vercel-storage.com/x"), HOST).is_ok());
        assert!(validate_blob_url(Some("https://Store.Blob.Vercel-Storage.com/x"), HOST).is_ok());
        Ok(())
    }

    #[test]
    fn missing_or_blank_url_is_required_error() {
        for raw in [None, Some(""), Some("   ")] {
            let err = validate_blob_url(raw, HOST).err();
            let err = err.as_ref().map(|err| (err.status(), err.message()));
            assert_eq!(err, Some((StatusCode::BAD_REQUEST, MSG_URL_REQUIRED)));
        }
    }

    #[test]
    fn foreign_and_lookalike_urls_are_rejected() {
        let rejected = [
            "https://evil.example.com/x",
            "https://evil.example.com/?next=blob.vercel-storage.com",
            "https://blob.vercel-storage.com.evil.example.com/x",
            "https://notblob.vercel-storage.com/x",
            "https://blob.vercel-storage.com@evil.example.com/x",
            "http://store.public.blob.vercel-storage.com/x",
            "blob.vercel-storage.com/x",
        ];
        for raw in rejected {
            let err = validate_blob_url(Some(raw), HOST).err();
            let err = err.as_ref().map(|err| (err.status(), err.message()));
            assert_eq!(err, Some((StatusCode::BAD_REQUEST, MSG_URL_INVALID)), "{raw}");
        }
    }

    #[test]
    fn panic_payloads_become_generic_failures() -> anyhow::Result<()> {
        let metrics = Metrics::new()?;
        let payloads: [Box<dyn Any + Send>; 3] = [
            Box::new("static detail"),
            Box::new(String::from("owned detail")),
            Box::new(42_u8),
        ];
        for payload in payloads {
            let response = delete_panicked(&metrics, payload);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
        assert_eq!(metrics.snapshot().deletions_failed, 3);
        Ok(())
    }
}
