mod api_doc;
mod config;
mod elevation;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Context;
use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("elevation-relay starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let port = config.service_port;

    let state = AppState::from_config(config)?;
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Proxy server running at http://localhost:{}", port);
    tracing::info!("API docs available at http://localhost:{}{}", port, routes::SWAGGER_UI);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
