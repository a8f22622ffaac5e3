use crate::config::Config;
use crate::elevation::ElevationClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub elevation_client: ElevationClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let elevation_client = ElevationClient::from_config(&config)?;
        Ok(Self {
            elevation_client,
            config: Arc::new(config),
        })
    }
}
