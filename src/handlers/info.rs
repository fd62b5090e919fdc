use crate::models::{InfoResponse, Link, LinksResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use std::collections::BTreeMap;

/// GET /actuator/info handler - Build and runtime information
#[utoipa::path(
    get,
    path = routes::INFO,
    responses(
        (status = 200, description = "Application information", body = InfoResponse)
    ),
    tag = "actuator"
)]
pub async fn info_handler(State(state): State<AppState>) -> (StatusCode, Json<InfoResponse>) {
    (
        StatusCode::OK,
        Json(InfoResponse {
            name: state.config.app_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            static_dir: state.config.static_dir.display().to_string(),
            started_at: state.started_at.to_rfc3339(),
        }),
    )
}

/// GET /actuator handler - Lists the management endpoints
#[utoipa::path(
    get,
    path = routes::ACTUATOR,
    responses(
        (status = 200, description = "Management endpoint links", body = LinksResponse)
    ),
    tag = "actuator"
)]
pub async fn links_handler() -> (StatusCode, Json<LinksResponse>) {
    let links = [
        ("self", routes::ACTUATOR),
        ("health", routes::HEALTH),
        ("info", routes::INFO),
    ]
    .into_iter()
    .map(|(name, href)| (name.to_string(), Link { href: href.to_string() }))
    .collect::<BTreeMap<_, _>>();

    (StatusCode::OK, Json(LinksResponse { links }))
}
