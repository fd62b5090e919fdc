use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, InfoResponse, Link, LinksResponse, UnhealthyResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "spa-gateway API",
        version = "1.0.0",
        description = "Serves a single-page application and forwards its client-side routes to the entry document"
    ),
    paths(
        handlers::health::health_handler,
        handlers::info::info_handler,
        handlers::info::links_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse,
            InfoResponse,
            Link,
            LinksResponse
        )
    ),
    tags(
        (name = "actuator", description = "Management and health endpoints")
    )
)]
pub struct ApiDoc;
