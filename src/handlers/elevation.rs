use crate::config::CredentialMode;
use crate::elevation::is_ok_status;
use crate::error::ApiError;
use crate::models::{ElevationQuery, ElevationResponse, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use anyhow::anyhow;
use axum::{extract::rejection::QueryRejection, extract::Query, extract::State, Json};
use serde_json::Value as JsonValue;

/// GET /elevation handler - Relay an elevation lookup to the upstream service
///
/// In server credential mode the configured key is attached and anything but
/// an "OK" upstream status is turned into an error. In caller credential mode
/// the caller's key is forwarded and the upstream document is relayed as is.
#[utoipa::path(
    get,
    path = routes::ELEVATION,
    params(ElevationQuery),
    responses(
        (status = 200, description = "Upstream elevation document", body = ElevationResponse),
        (status = 500, description = "API key missing, non-OK upstream status (error plus `details`), or plain-text `Server Error` when the upstream is unreachable", body = ErrorResponse)
    ),
    tag = "elevation"
)]
pub async fn elevation_handler(
    State(state): State<AppState>,
    query: Result<Query<ElevationQuery>, QueryRejection>,
) -> Result<Json<JsonValue>, ApiError> {
    let Query(query) =
        query.inspect_err(|e| tracing::error!("Rejected elevation request: {}", e.body_text()))?;

    match state.config.credential_mode {
        CredentialMode::Server => {
            let Some(api_key) = state.config.google_api_key.as_deref() else {
                tracing::error!("Google API key is not configured, refusing elevation request");
                return Err(ApiError::MissingApiKey);
            };

            if query.key.is_some() {
                tracing::debug!("Ignoring caller-supplied key in server credential mode");
            }

            let data = state
                .elevation_client
                .fetch(&query.path, &query.samples, api_key)
                .await
                .inspect_err(|e| tracing::error!("Error fetching elevation data: {:#}", e))?;

            if !data.is_object() {
                tracing::error!("Error fetching elevation data: not a JSON document: {}", data);
                return Err(anyhow!("Elevation service returned a non-object body").into());
            }

            if !is_ok_status(&data) {
                tracing::error!("Error fetching elevation data: {}", data);
                return Err(ApiError::UpstreamStatus(data));
            }

            tracing::info!("Relayed elevation data for {} samples", query.samples);
            Ok(Json(data))
        }
        CredentialMode::Caller => {
            let key = query.key.as_deref().unwrap_or_default();

            let data = state
                .elevation_client
                .fetch(&query.path, &query.samples, key)
                .await
                .inspect_err(|e| tracing::error!("Error fetching elevation data: {:#}", e))?;

            tracing::info!("Relayed elevation data for {} samples", query.samples);
            Ok(Json(data))
        }
    }
}
