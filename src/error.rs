use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value as JsonValue;

use crate::models::{ErrorResponse, UpstreamErrorResponse};

pub const MISSING_API_KEY_MESSAGE: &str = "Google API Key is missing or invalid";
pub const UPSTREAM_STATUS_MESSAGE: &str = "Error fetching elevation data";
pub const SERVER_ERROR_BODY: &str = "Server Error";

/// Custom error type for the relay endpoint
///
/// Apart from a malformed query string, every variant maps to HTTP 500. The
/// structured variants tell the caller what went wrong; transport failures are
/// reported as plain text so that internal error details stay in the server log.
#[derive(Debug)]
pub enum ApiError {
    /// `path` or `samples` missing from the query string
    InvalidQuery(QueryRejection),
    /// No server-held credential is configured
    MissingApiKey,
    /// The upstream answered with a status other than "OK"
    UpstreamStatus(JsonValue),
    /// Network failure, timeout or unparseable upstream body
    Upstream(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidQuery(rejection) => rejection.into_response(),
            ApiError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: MISSING_API_KEY_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::UpstreamStatus(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UpstreamErrorResponse {
                    error: UPSTREAM_STATUS_MESSAGE.to_string(),
                    details,
                }),
            )
                .into_response(),
            ApiError::Upstream(err) => {
                tracing::debug!("Hiding upstream failure from caller: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Upstream(err)
    }
}
