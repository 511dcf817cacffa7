//! Typed server settings resolved from the process environment.
//!
//! # Design
//! - Resolve every setting once at startup; secrets are looked up per request instead.
//! - Parse through an injected lookup so tests never mutate the real environment.
//! - Blank values fall back to defaults; malformed values are rejected with context.

use std::net::SocketAddr;
use std::time::Duration;

use parlor_telemetry::LogFormat;
use url::Url;

use crate::defaults::{
    DEFAULT_BIND_ADDR, DEFAULT_BLOB_ALLOWED_HOST, DEFAULT_BLOB_API_URL, DEFAULT_BLOB_API_VERSION,
    DEFAULT_BLOB_REQUEST_TIMEOUT_SECS, DEFAULT_LOG_LEVEL, ENV_BIND_ADDR, ENV_BLOB_ALLOWED_HOST,
    ENV_BLOB_API_URL, ENV_BLOB_API_VERSION, ENV_BLOB_REQUEST_TIMEOUT_SECS, ENV_LOG_FORMAT,
    ENV_LOG_LEVEL,
};
use crate::error::{ConfigError, ConfigResult};

/// Settings for talking to the external blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobSettings {
    /// Base URL of the blob store API.
    pub api_url: Url,
    /// Value sent in the `x-api-version` header.
    pub api_version: String,
    /// Host suffix every deletion target must live under.
    pub allowed_host: String,
    /// Timeout applied to each remote call.
    pub request_timeout: Duration,
}

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the API listens on.
    pub bind_addr: SocketAddr,
    /// Fallback log level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Blob store settings.
    pub blob: BlobSettings,
}

impl ServerConfig {
    /// Resolve configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when a variable holds a malformed value.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when a variable holds a malformed value.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_raw = read(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::invalid(ENV_BIND_ADDR, &bind_raw, "invalid_socket_addr"))?;

        let log_level = read(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_format = match read(ENV_LOG_FORMAT) {
            Some(raw) => LogFormat::from_name(&raw)
                .ok_or_else(|| ConfigError::invalid(ENV_LOG_FORMAT, &raw, "unknown_log_format"))?,
            None => LogFormat::infer(),
        };

        let blob = BlobSettings {
            api_url: parse_api_url(read(ENV_BLOB_API_URL))?,
            api_version: read(ENV_BLOB_API_VERSION)
                .unwrap_or_else(|| DEFAULT_BLOB_API_VERSION.to_string()),
            allowed_host: parse_allowed_host(read(ENV_BLOB_ALLOWED_HOST))?,
            request_timeout: parse_timeout(read(ENV_BLOB_REQUEST_TIMEOUT_SECS))?,
        };

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            blob,
        })
    }
}

fn parse_api_url(raw: Option<String>) -> ConfigResult<Url> {
    let raw = raw.unwrap_or_else(|| DEFAULT_BLOB_API_URL.to_string());
    let url = Url::parse(&raw)
        .map_err(|_| ConfigError::invalid(ENV_BLOB_API_URL, &raw, "invalid_url"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(
            ENV_BLOB_API_URL,
            &raw,
            "unsupported_scheme",
        ));
    }
    Ok(url)
}

fn parse_allowed_host(raw: Option<String>) -> ConfigResult<String> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_BLOB_ALLOWED_HOST.to_string());
    };
    let host = raw.trim_start_matches('.').to_ascii_lowercase();
    if host.is_empty() || host.contains(['/', ':', '?', '#', ' ']) {
        return Err(ConfigError::invalid(
            ENV_BLOB_ALLOWED_HOST,
            &raw,
            "invalid_host_suffix",
        ));
    }
    Ok(host)
}

fn parse_timeout(raw: Option<String>) -> ConfigResult<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_BLOB_REQUEST_TIMEOUT_SECS));
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::invalid(
            ENV_BLOB_REQUEST_TIMEOUT_SECS,
            &raw,
            "invalid_timeout_secs",
        )),
    }
}
