use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use parlor_api::{ApiDependencies, ApiServer, HttpBlobStore};
use parlor_config::{EnvCredentials, ServerConfig, SharedCredentials};
use parlor_telemetry::{GlobalContextGuard, LoggingConfig, Metrics};
use tracing::info;

/// Dependencies required to bootstrap the Parlor API.
pub(crate) struct BootstrapDependencies {
    config: ServerConfig,
    credentials: SharedCredentials,
    telemetry: Metrics,
}

impl BootstrapDependencies {
    /// Construct production dependencies from the environment for the binary entrypoint.
    pub(crate) fn from_env() -> AppResult<Self> {
        let config =
            ServerConfig::from_env().map_err(|err| AppError::config("server_config.from_env", err))?;
        Self::from_config(config, Arc::new(EnvCredentials))
    }

    /// Construct dependencies around an already-resolved configuration.
    pub(crate) fn from_config(
        config: ServerConfig,
        credentials: SharedCredentials,
    ) -> AppResult<Self> {
        let telemetry =
            Metrics::new().map_err(|err| AppError::telemetry("telemetry.metrics", err))?;
        Ok(Self {
            config,
            credentials,
            telemetry,
        })
    }

    /// Assemble the API server and the address it should listen on.
    fn into_server(self) -> AppResult<(ApiServer, SocketAddr)> {
        let Self {
            config,
            credentials,
            telemetry,
        } = self;

        let blob_store = HttpBlobStore::new(&config.blob)
            .map_err(|err| AppError::blob_store("blob_store.new", err))?;
        info!(
            endpoint = %blob_store.endpoint(),
            allowed_host = %config.blob.allowed_host,
            timeout_secs = config.blob.request_timeout.as_secs(),
            "Blob store client ready"
        );

        let api = ApiServer::new(ApiDependencies {
            credentials,
            blob_store: Arc::new(blob_store),
            telemetry,
            allowed_host: config.blob.allowed_host,
        });
        Ok((api, config.bind_addr))
    }
}

/// Entry point for the Parlor application boot sequence.
///
/// # Errors
///
/// Returns an error if configuration, logging, or server startup fails.
pub async fn run_app() -> AppResult<()> {
    let dependencies = BootstrapDependencies::from_env()?;
    run_app_with(dependencies).await
}

/// Boot sequence that relies entirely on injected dependencies.
pub(crate) async fn run_app_with(dependencies: BootstrapDependencies) -> AppResult<()> {
    let logging = LoggingConfig {
        level: &dependencies.config.log_level,
        format: dependencies.config.log_format,
        ..LoggingConfig::default()
    };
    parlor_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;
    let _context = GlobalContextGuard::new("parlor-api");

    info!("Parlor application bootstrap starting");

    let (api, addr) = dependencies.into_server()?;
    info!(addr = %addr, "Launching API listener");

    api.serve(addr)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))?;
    info!("API server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_config::StaticCredentials;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Ok(ServerConfig::from_lookup(|key| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        })?)
    }

    #[test]
    fn server_is_assembled_from_resolved_config() -> anyhow::Result<()> {
        let config = config_from(&[
            ("PARLOR_BIND_ADDR", "0.0.0.0:8080"),
            ("BLOB_API_URL", "http://127.0.0.1:9000/blob"),
        ])?;
        let dependencies =
            BootstrapDependencies::from_config(config, Arc::new(StaticCredentials::missing()))?;
        let (_api, addr) = dependencies.into_server()?;
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        Ok(())
    }

    #[test]
    fn defaults_listen_on_loopback() -> anyhow::Result<()> {
        let dependencies = BootstrapDependencies::from_config(
            config_from(&[])?,
            Arc::new(StaticCredentials::new("vercel_blob_rw_token")),
        )?;
        let (_api, addr) = dependencies.into_server()?;
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 3000);
        Ok(())
    }
}
