//! Axum HTTP server: router, listener, graceful shutdown.

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::forward;
use crate::handlers::{fallback_handler, health_handler, info_handler, links_handler};
use crate::routes;
use crate::state::AppState;

/// Build the full application.
///
/// Requests pass the SPA forward before reaching the router, so routing
/// sees the forward target while the trace layer sees the path the client
/// asked for.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route(routes::ACTUATOR, get(links_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::INFO, get(info_handler))
        .merge(SwaggerUi::new(routes::API_DOCS).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(fallback_handler)
        .with_state(state);

    let forwarded = ServiceBuilder::new()
        .map_request(forward::forward_request)
        .service(router);

    Router::new().fallback_service(forwarded).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

/// Bind the listener and serve until a shutdown signal arrives.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    let listen_addr = state.config.listen_address();

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    tracing::info!(address = %listen_addr, "spa-gateway listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("spa-gateway shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
