use crate::models::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /actuator/health handler - Health check endpoint
///
/// Verifies that the SPA entry document is present in the static directory.
/// Returns 200 OK when it can be served, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "actuator"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    let entry = state.entry_document();

    let problem = match tokio::fs::metadata(&entry).await {
        Ok(meta) if meta.is_file() => None,
        Ok(_) => Some(format!("{} is not a file", entry.display())),
        Err(e) => Some(format!("Cannot read {}: {}", entry.display(), e)),
    };

    match problem {
        None => {
            tracing::debug!("Health check passed");
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "UP".to_string(),
                }),
            ))
        }
        Some(error) => {
            tracing::error!("Health check failed: {}", error);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "DOWN".to_string(),
                    error,
                }),
            ))
        }
    }
}
