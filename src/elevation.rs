use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::config::Config;

/// Shareable client for the upstream elevation service
///
/// Wraps a single pooled `reqwest::Client`, so cloning it into each handler
/// is cheap and every request still reuses the same connections.
#[derive(Clone)]
pub struct ElevationClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    // '&' when the base URL already carries a query string
    separator: char,
}

impl ElevationClient {
    /// Create a new client from configuration
    ///
    /// The configured upstream timeout applies to the whole exchange,
    /// from connecting until the response body has been read.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let base = reqwest::Url::parse(&config.elevation_api_url)
            .with_context(|| format!("Invalid elevation API URL '{}'", config.elevation_api_url))?;
        let separator = if base.query().is_some() { '&' } else { '?' };

        tracing::info!("Elevation requests will be sent to: {}", config.elevation_api_url);

        Ok(Self {
            http,
            base_url: Arc::from(config.elevation_api_url.as_str()),
            separator,
        })
    }

    /// Build the upstream URL by direct substitution
    ///
    /// `path` and `samples` are not escaped: whatever encoding the caller
    /// used is what the upstream receives.
    pub fn upstream_url(&self, path: &str, samples: &str, key: &str) -> String {
        format!(
            "{}{}path={}&samples={}&key={}",
            self.base_url, self.separator, path, samples, key
        )
    }

    /// Issue one GET to the upstream and parse its body as JSON
    ///
    /// The upstream HTTP status is not inspected; the caller decides what to
    /// do with the `status` field of the returned document.
    pub async fn fetch(&self, path: &str, samples: &str, key: &str) -> Result<JsonValue> {
        let url = self.upstream_url(path, samples, key);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to reach elevation service")?;

        tracing::debug!("Elevation service responded with HTTP {}", response.status());

        response
            .json::<JsonValue>()
            .await
            .context("Failed to parse elevation service response as JSON")
    }
}

/// Whether an upstream document reports success
pub fn is_ok_status(body: &JsonValue) -> bool {
    body.get("status").and_then(JsonValue::as_str) == Some("OK")
}
