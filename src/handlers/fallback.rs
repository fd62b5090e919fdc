use crate::error::ApiError;
use crate::forward;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;

/// Handler for every path no route claims
///
/// Backend paths get a JSON 404; anything else is resolved against the
/// static directory, which is where forwarded client routes land.
pub async fn fallback_handler(State(state): State<AppState>, req: Request) -> Response {
    let path = req.uri().path().to_string();

    if forward::is_backend_path(&path) {
        tracing::info!("No backend handler for {}", path);
        return ApiError::RouteNotFound(path).into_response();
    }

    match state.assets.oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ErrorResponse;
    use axum::{body::Body, http::{Request, StatusCode}, Router};
    use std::path::PathBuf;

    fn setup_test_app() -> Router {
        let config = Config {
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/dist")),
            app_name: "spa-gateway".to_string(),
        };

        Router::new()
            .fallback(fallback_handler)
            .with_state(AppState::new(config))
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_not_found() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "No handler for /api/v1/unknown");
    }

    #[tokio::test]
    async fn test_unknown_actuator_path_is_json_not_found() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/actuator/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_static_file_is_served() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/assets/app.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let expected = std::fs::read(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/testdata/dist/assets/app.js"
        ))
        .unwrap();
        assert_eq!(body.as_ref(), expected.as_slice());
    }

    #[tokio::test]
    async fn test_missing_static_file_is_not_found() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/assets/missing.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
