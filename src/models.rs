use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Response type for the info endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub static_dir: String,
    pub started_at: String,
}

/// A single link in the management discovery document
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct Link {
    pub href: String,
}

/// Response type for the management discovery document
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LinksResponse {
    #[serde(rename = "_links")]
    pub links: BTreeMap<String, Link>,
}
