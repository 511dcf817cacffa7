//! Per-request metrics and log context.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use parlor_telemetry::{Metrics, RequestContext, with_request_context};

use crate::http::request_id::request_id_of;

/// Count the request by route and status, with its identifiers in scope for handler logs.
pub(crate) async fn track_request(
    State(metrics): State<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let route = request.extensions().get::<MatchedPath>().map_or_else(
        || request.uri().path().to_string(),
        |matched| matched.as_str().to_string(),
    );
    let context = RequestContext {
        request_id: request_id_of(&request),
        route: route.clone(),
    };

    let response = with_request_context(context, next.run(request)).await;
    metrics.inc_http_request(&route, response.status().as_u16());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, body::to_bytes, middleware, routing::get};
    use parlor_telemetry::current_request;
    use tower::ServiceExt;

    async fn echo_route() -> String {
        current_request().map(|ctx| ctx.route).unwrap_or_default()
    }

    #[tokio::test]
    async fn requests_are_counted_under_their_route_template() -> anyhow::Result<()> {
        let metrics = Metrics::new()?;
        let app = Router::new()
            .route("/items/{id}", get(echo_route))
            .route_layer(middleware::from_fn_with_state(metrics.clone(), track_request));

        let response = app
            .oneshot(axum::http::Request::builder().uri("/items/7").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&body[..], b"/items/{id}");

        let rendered = metrics.render()?;
        let line = rendered
            .lines()
            .find(|line| line.starts_with("http_requests_total{"))
            .unwrap_or_default();
        assert!(line.contains(r#"route="/items/{id}""#), "{rendered}");
        assert!(line.contains(r#"code="200""#), "{rendered}");
        assert!(line.ends_with(" 1"), "{rendered}");
        Ok(())
    }
}
