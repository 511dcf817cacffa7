//! Router construction and server host for the API.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    middleware,
    response::Response,
    http::{
        HeaderName, Method, Request,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get},
};
use parlor_api_models::{AUTH_DEBUG_PATH, IMAGES_PATH};
use parlor_config::SharedCredentials;
use parlor_telemetry::{Metrics, build_sha};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::blob::SharedBlobStore;
use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::{HEADER_REQUEST_ID, HEALTH_PATH, METRICS_PATH};
use crate::http::debug::auth_debug;
use crate::http::health::{health, metrics};
use crate::http::images::{delete_image, delete_panicked};
use crate::http::request_id::{propagate_request_id, request_id_of, set_request_id};
use crate::http::telemetry::track_request;
use crate::state::ApiState;

/// Collaborators injected into the API at construction time.
pub struct ApiDependencies {
    /// Source of the blob store write credential, consulted per request.
    pub credentials: SharedCredentials,
    /// Blob store receiving delete calls.
    pub blob_store: SharedBlobStore,
    /// Shared metrics registry.
    pub telemetry: Metrics,
    /// Host suffix deletion targets must live under.
    pub allowed_host: String,
}

/// Axum router wrapper that hosts the Parlor API services.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct the API server with the supplied dependencies wired through application state.
    #[must_use]
    pub fn new(dependencies: ApiDependencies) -> Self {
        let ApiDependencies {
            credentials,
            blob_store,
            telemetry,
            allowed_host,
        } = dependencies;
        let state = Arc::new(ApiState::new(
            credentials,
            blob_store,
            telemetry.clone(),
            allowed_host,
        ));

        let cors_layer = CorsLayer::new()
            .allow_origin(cors::Any)
            .allow_methods([Method::GET, Method::DELETE, Method::OPTIONS])
            .allow_headers([
                CONTENT_TYPE,
                AUTHORIZATION,
                HeaderName::from_static(HEADER_REQUEST_ID),
            ]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    request_id = %request_id_of(request),
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                },
            );
        let layered = ServiceBuilder::new()
            .layer(set_request_id())
            .layer(propagate_request_id())
            .layer(trace_layer)
            .layer(middleware::from_fn_with_state(telemetry.clone(), track_request));

        let router = Self::build_router(telemetry)
            .layer(cors_layer)
            .route_layer(layered)
            .with_state(state);

        Self { router }
    }

    fn build_router(telemetry: Metrics) -> Router<Arc<ApiState>> {
        let on_panic = move |panic: Box<dyn Any + Send + 'static>| -> Response {
            delete_panicked(&telemetry, panic)
        };
        Router::new()
            .route(HEALTH_PATH, get(health))
            .route(METRICS_PATH, get(metrics))
            .route(
                IMAGES_PATH,
                delete(delete_image).layer(CatchPanicLayer::custom(on_panic)),
            )
            .route(AUTH_DEBUG_PATH, get(auth_debug))
    }

    /// Serve the API using the configured router on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> ApiServerResult<()> {
        tracing::info!("Starting API on {}", addr);
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }

    #[cfg(test)]
    pub(crate) const fn router(&self) -> &Router {
        &self.router
    }
}
