use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for backend-owned endpoints
///
/// Paths under the API and management prefixes never fall through to the
/// SPA, so a miss there is reported as JSON instead of an HTML page.
#[derive(Debug)]
pub enum ApiError {
    /// No handler is registered for a backend path
    RouteNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("No handler for {}", path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
