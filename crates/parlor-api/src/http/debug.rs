//! Authorization header diagnostics.
//!
//! Reports what the server sees in the caller's `Authorization` header so
//! client-side auth problems can be told apart. The credential is never echoed.

use axum::{
    Json,
    http::{HeaderMap, header::AUTHORIZATION},
};
use parlor_api_models::{AuthDebugResponse, is_structurally_valid};
use tracing::debug;

const BEARER_SCHEME: &str = "Bearer";

pub(crate) async fn auth_debug(headers: HeaderMap) -> Json<AuthDebugResponse> {
    let report = inspect_authorization(&headers);
    debug!(
        present = report.present,
        scheme = report.scheme.as_deref().unwrap_or(""),
        token_length = report.token_length.unwrap_or(0),
        structurally_valid = report.structurally_valid,
        "authorization header inspected"
    );
    Json(report)
}

pub(crate) fn inspect_authorization(headers: &HeaderMap) -> AuthDebugResponse {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return AuthDebugResponse {
            present: false,
            scheme: None,
            token_length: None,
            structurally_valid: false,
        };
    };

    let Ok(value) = value.to_str() else {
        return AuthDebugResponse {
            present: true,
            scheme: None,
            token_length: None,
            structurally_valid: false,
        };
    };

    let (scheme, token) = match value.trim().split_once(' ') {
        Some((scheme, token)) => (Some(scheme.to_string()), token.trim()),
        None => (None, value.trim()),
    };
    let is_bearer = scheme
        .as_deref()
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case(BEARER_SCHEME));

    AuthDebugResponse {
        present: true,
        scheme,
        token_length: Some(token.len()),
        structurally_valid: is_bearer && is_structurally_valid(token),
    }
}
