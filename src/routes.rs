// Route path constants - single source of truth for all paths the host owns

pub const API_PREFIX: &str = "/api";
pub const ACTUATOR_PREFIX: &str = "/actuator";

/// Entry document of the single-page application
pub const SPA_ENTRY: &str = "/index.html";

pub const ACTUATOR: &str = "/actuator";
pub const HEALTH: &str = "/actuator/health";
pub const INFO: &str = "/actuator/info";

pub const API_DOCS: &str = "/api/docs";
pub const OPENAPI_JSON: &str = "/api/openapi.json";
