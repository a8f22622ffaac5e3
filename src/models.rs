use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Query parameters for the elevation endpoint
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ElevationQuery {
    /// Coordinate path, either `lat,lng|lat,lng` pairs or `enc:` polyline
    pub path: String,
    /// Number of samples to interpolate along the path
    pub samples: String,
    /// API key, only used in caller credential mode
    pub key: Option<String>,
}

/// Upstream elevation document
///
/// Only used to describe the API. Responses are relayed as raw JSON so that
/// fields not listed here reach the caller unchanged.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ElevationResponse {
    #[serde(default)]
    pub results: Vec<ElevationSample>,
    pub status: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ElevationSample {
    pub elevation: f64,
    pub location: LatLng,
    pub resolution: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error response for a non-OK upstream status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpstreamErrorResponse {
    pub error: String,
    pub details: JsonValue,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
