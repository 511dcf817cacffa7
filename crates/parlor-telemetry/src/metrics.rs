//! Prometheus-backed metrics registry and snapshot helpers.
//!
//! # Design
//! - Encapsulates collector registration to keep the public API small.
//! - Exposes only the counters the Parlor API reports on.

use std::sync::Arc;

use prometheus::{IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::{Result, TelemetryError};

/// Terminal state of a blob deletion request, used as a metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The request failed validation before any remote call.
    Rejected,
    /// The storage credential was missing.
    Unconfigured,
    /// The blob store confirmed the deletion.
    Deleted,
    /// The remote call failed.
    Failed,
}

impl DeletionOutcome {
    /// Label value recorded for this outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Unconfigured => "unconfigured",
            Self::Deleted => "deleted",
            Self::Failed => "failed",
        }
    }
}

/// Prometheus-backed metrics registry shared across services.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    http_requests_total: IntCounterVec,
    blob_deletions_total: IntCounterVec,
}

/// Snapshot of the deletion counters for health reporting and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    /// Requests rejected by validation.
    pub deletions_rejected: u64,
    /// Requests refused because the credential was missing.
    pub deletions_unconfigured: u64,
    /// Deletions confirmed by the blob store.
    pub deletions_succeeded: u64,
    /// Deletions that failed upstream.
    pub deletions_failed: u64,
}

impl Metrics {
    /// Build a registry holding the request and deletion counters.
    ///
    /// # Errors
    ///
    /// Returns an error if a counter cannot be created or registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let http_requests_total = register_counter(
            &registry,
            "http_requests_total",
            "HTTP requests served, by matched route and status code",
            &["route", "code"],
        )?;
        let blob_deletions_total = register_counter(
            &registry,
            "blob_deletions_total",
            "Image deletion requests, by terminal outcome",
            &["outcome"],
        )?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                http_requests_total,
                blob_deletions_total,
            }),
        })
    }

    /// Increment the HTTP request counter for the given route and status code.
    pub fn inc_http_request(&self, route: &str, status: u16) {
        self.inner
            .http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Increment the blob deletion counter for the given outcome.
    pub fn inc_blob_deletion(&self, outcome: DeletionOutcome) {
        self.inner
            .blob_deletions_total
            .with_label_values(&[outcome.as_str()])
            .inc();
    }

    /// Render the metrics registry using the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be encoded.
    pub fn render(&self) -> Result<String> {
        TextEncoder::new()
            .encode_to_string(&self.inner.registry.gather())
            .map_err(|source| TelemetryError::Render { source })
    }

    /// Take a point-in-time snapshot of the deletion counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let count = |outcome: DeletionOutcome| {
            self.inner
                .blob_deletions_total
                .with_label_values(&[outcome.as_str()])
                .get()
        };
        MetricsSnapshot {
            deletions_rejected: count(DeletionOutcome::Rejected),
            deletions_unconfigured: count(DeletionOutcome::Unconfigured),
            deletions_succeeded: count(DeletionOutcome::Deleted),
            deletions_failed: count(DeletionOutcome::Failed),
        }
    }
}

fn register_counter(
    registry: &Registry,
    name: &'static str,
    help: &str,
    labels: &[&str],
) -> Result<IntCounterVec> {
    let counter = IntCounterVec::new(Opts::new(name, help), labels)
        .map_err(|source| TelemetryError::Metric { name, source })?;
    registry
        .register(Box::new(counter.clone()))
        .map_err(|source| TelemetryError::Metric { name, source })?;
    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_render_includes_registered_counters() -> Result<()> {
        let metrics = Metrics::new()?;
        metrics.inc_http_request("/api/images", 200);
        metrics.inc_blob_deletion(DeletionOutcome::Deleted);

        let rendered = metrics.render()?;
        assert!(rendered.contains("http_requests_total"));
        assert!(rendered.contains("blob_deletions_total{outcome=\"deleted\"} 1"));
        Ok(())
    }

    #[test]
    fn snapshot_tracks_each_outcome_separately() -> Result<()> {
        let metrics = Metrics::new()?;
        metrics.inc_blob_deletion(DeletionOutcome::Rejected);
        metrics.inc_blob_deletion(DeletionOutcome::Rejected);
        metrics.inc_blob_deletion(DeletionOutcome::Failed);

        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                deletions_rejected: 2,
                deletions_unconfigured: 0,
                deletions_succeeded: 0,
                deletions_failed: 1,
            }
        );
        Ok(())
    }

    #[test]
    fn counters_cannot_be_registered_twice() -> Result<()> {
        let registry = Registry::new();
        register_counter(&registry, "dupe_total", "first", &["outcome"])?;
        let err = register_counter(&registry, "dupe_total", "second", &["outcome"]).err();
        assert!(matches!(
            err,
            Some(TelemetryError::Metric {
                name: "dupe_total",
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn registries_are_independent_per_instance() -> Result<()> {
        let first = Metrics::new()?;
        let second = Metrics::new()?;
        first.inc_blob_deletion(DeletionOutcome::Deleted);
        assert_eq!(first.snapshot().deletions_succeeded, 1);
        assert_eq!(second.snapshot(), MetricsSnapshot::default());
        Ok(())
    }
}
