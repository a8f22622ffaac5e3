use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    ElevationResponse, ElevationSample, ErrorResponse, HealthResponse, LatLng,
    UpstreamErrorResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "elevation-relay API",
        version = "1.0.0",
        description = "Relays terrain elevation lookups to the Google Elevation API with CORS enabled"
    ),
    paths(
        handlers::health::health_handler,
        handlers::elevation::elevation_handler
    ),
    components(
        schemas(
            ElevationResponse,
            ElevationSample,
            LatLng,
            ErrorResponse,
            UpstreamErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "elevation", description = "Elevation relay operations")
    )
)]
pub struct ApiDoc;
