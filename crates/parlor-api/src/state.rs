//! Shared state handed to every request handler.

use parlor_config::SharedCredentials;
use parlor_telemetry::Metrics;

use crate::blob::SharedBlobStore;

pub(crate) struct ApiState {
    pub(crate) credentials: SharedCredentials,
    pub(crate) blob_store: SharedBlobStore,
    pub(crate) telemetry: Metrics,
    pub(crate) allowed_host: String,
}

impl ApiState {
    pub(crate) fn new(
        credentials: SharedCredentials,
        blob_store: SharedBlobStore,
        telemetry: Metrics,
        allowed_host: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            blob_store,
            telemetry,
            allowed_host: allowed_host.into().to_ascii_lowercase(),
        }
    }
}
