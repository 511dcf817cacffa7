//! # Design
//!
//! - Centralize application-level errors for bootstrap.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration operations failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: parlor_config::ConfigError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: parlor_telemetry::TelemetryError,
    },
    /// Blob store client construction failed.
    #[error("blob store operation failed")]
    BlobStore {
        /// Operation identifier.
        operation: &'static str,
        /// Source blob store error.
        source: parlor_api::BlobStoreError,
    },
    /// API server operations failed.
    #[error("api server operation failed")]
    ApiServer {
        /// Operation identifier.
        operation: &'static str,
        /// Source API server error.
        source: parlor_api::ApiServerError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: parlor_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: parlor_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn blob_store(
        operation: &'static str,
        source: parlor_api::BlobStoreError,
    ) -> Self {
        Self::BlobStore { operation, source }
    }

    pub(crate) const fn api_server(
        operation: &'static str,
        source: parlor_api::ApiServerError,
    ) -> Self {
        Self::ApiServer { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_error_keeps_operation_and_source() {
        let source = parlor_config::ConfigError::InvalidField {
            field: "PARLOR_BIND_ADDR",
            value: Some("nowhere".to_string()),
            reason: "invalid_socket_addr",
        };
        let err = AppError::config("server_config.from_env", source);
        assert_eq!(err.to_string(), "configuration operation failed");
        assert!(matches!(
            err,
            AppError::Config {
                operation: "server_config.from_env",
                ..
            }
        ));
        assert!(err.source().is_some());
    }
}
