//! Liveness and Prometheus scrape endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, http::header::CONTENT_TYPE, response::IntoResponse};
use parlor_telemetry::build_sha;
use serde::Serialize;
use tracing::error;

use crate::http::errors::ApiError;
use crate::state::ApiState;

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4";

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) build: &'static str,
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        build: build_sha(),
    })
}

pub(crate) async fn metrics(
    State(state): State<Arc<ApiState>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = state.telemetry.render().map_err(|err| {
        error!(error = %err, detail = ?err, "metrics scrape failed");
        ApiError::internal("Failed to render metrics")
    })?;
    Ok(([(CONTENT_TYPE, PROMETHEUS_TEXT)], body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok_with_build() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert!(!body.build.is_empty());
    }
}
