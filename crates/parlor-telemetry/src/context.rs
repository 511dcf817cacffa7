//! Application and request context for log events.
//!
//! The application span is entered once at startup. Per-request identifiers live in
//! task-local storage for the duration of the request future.

use std::future::Future;

use tracing::span::EnteredSpan;

use crate::init::build_sha;

/// Keeps the `app` span entered; every event emitted while it lives carries the
/// service name and build.
#[derive(Debug)]
pub struct GlobalContextGuard {
    _span: EnteredSpan,
}

impl GlobalContextGuard {
    /// Enter the `app` span for `service`.
    #[must_use]
    pub fn new(service: &str) -> Self {
        let span = tracing::info_span!("app", service = %service, build_sha = %build_sha());
        Self {
            _span: span.entered(),
        }
    }
}

/// Identifiers of the request currently being served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Value of the `x-request-id` header.
    pub request_id: String,
    /// Matched route template, or the raw path when nothing matched.
    pub route: String,
}

tokio::task_local! {
    static REQUEST: RequestContext;
}

/// Context of the request being served, if called from inside one.
#[must_use]
pub fn current_request() -> Option<RequestContext> {
    REQUEST.try_with(Clone::clone).ok()
}

/// Request identifier of the request being served, if any.
#[must_use]
pub fn current_request_id() -> Option<String> {
    REQUEST.try_with(|ctx| ctx.request_id.clone()).ok()
}

/// Run `fut` with `context` visible to [`current_request`].
pub async fn with_request_context<Fut, T>(context: RequestContext, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    REQUEST.scope(context, fut).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_span_is_entered_while_guard_lives() {
        let guard = GlobalContextGuard::new("parlor-api");
        drop(guard);
    }

    #[tokio::test]
    async fn request_context_is_scoped_to_the_future() {
        let context = RequestContext {
            request_id: "req-42".to_string(),
            route: "/api/images".to_string(),
        };
        let seen = with_request_context(context.clone(), async { current_request() }).await;
        assert_eq!(seen, Some(context));
        assert_eq!(current_request(), None);
        assert_eq!(current_request_id(), None);
    }

    #[tokio::test]
    async fn request_id_is_readable_on_its_own() {
        let context = RequestContext {
            request_id: "req-7".to_string(),
            route: "/health".to_string(),
        };
        let id = with_request_context(context, async { current_request_id() }).await;
        assert_eq!(id.as_deref(), Some("req-7"));
    }
}
