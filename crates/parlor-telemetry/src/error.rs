//! Error types for telemetry operations.

use thiserror::Error;

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Failures while installing logging or working with the metrics registry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed, or installation failed.
    #[error("failed to install tracing subscriber")]
    SubscriberInstall {
        /// Source subscriber error.
        source: tracing_subscriber::util::TryInitError,
    },
    /// A counter could not be created or added to the registry.
    #[error("failed to register metric")]
    Metric {
        /// Metric name.
        name: &'static str,
        /// Source Prometheus error.
        source: prometheus::Error,
    },
    /// The registry could not be encoded as text.
    #[error("failed to render metrics")]
    Render {
        /// Source Prometheus error.
        source: prometheus::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn metric_errors_name_the_counter() {
        let err = TelemetryError::Metric {
            name: "blob_deletions_total",
            source: prometheus::Error::AlreadyReg,
        };
        assert_eq!(err.to_string(), "failed to register metric");
        assert!(matches!(
            err,
            TelemetryError::Metric {
                name: "blob_deletions_total",
                ..
            }
        ));
        assert!(err.source().is_some());
    }
}
