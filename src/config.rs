use std::env;
use std::time::Duration;
use anyhow::{bail, Context, Result};

pub const DEFAULT_ELEVATION_API_URL: &str = "https://maps.googleapis.com/maps/api/elevation/json";

/// Where the upstream API credential comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMode {
    /// The credential is held by the server; callers cannot supply one
    Server,
    /// The caller's `key` query parameter is forwarded as-is
    Caller,
}

impl CredentialMode {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "server" => Ok(CredentialMode::Server),
            "caller" => Ok(CredentialMode::Caller),
            other => bail!(
                "ELEVATION_CREDENTIAL_MODE must be 'server' or 'caller', got '{}'",
                other
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CredentialMode::Server => "server",
            CredentialMode::Caller => "caller",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credential_mode: CredentialMode,
    pub google_api_key: Option<String>,
    pub elevation_api_url: String,
    pub upstream_timeout: Duration,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential_mode = match lookup("ELEVATION_CREDENTIAL_MODE") {
            Some(value) => CredentialMode::parse(&value)?,
            None => CredentialMode::Server,
        };

        // An empty key is as good as no key
        let google_api_key = lookup("GOOGLE_API_KEY").filter(|key| !key.trim().is_empty());

        let elevation_api_url = lookup("ELEVATION_API_URL")
            .unwrap_or_else(|| DEFAULT_ELEVATION_API_URL.to_string());
        reqwest::Url::parse(&elevation_api_url)
            .with_context(|| format!("ELEVATION_API_URL must be a valid URL, got '{}'", elevation_api_url))?;

        let timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u64>()
            .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;
        if timeout_secs == 0 {
            bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
        }

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            credential_mode,
            google_api_key,
            elevation_api_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Credential mode: {}", self.credential_mode.as_str());
        if self.credential_mode == CredentialMode::Server {
            tracing::info!("  Google API key: {}",
                if self.google_api_key.is_some() { "configured" } else { "missing" });
            if self.google_api_key.is_none() {
                tracing::warn!("GOOGLE_API_KEY is not set; every /elevation request will fail");
            }
        }
        tracing::info!("  Elevation API: {}", self.elevation_api_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout.as_secs());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
