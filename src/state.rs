use crate::config::Config;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assets: ServeDir,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let assets = ServeDir::new(&config.static_dir);
        AppState {
            config: Arc::new(config),
            assets,
            started_at: Utc::now(),
        }
    }

    /// Location of the SPA entry document on disk
    pub fn entry_document(&self) -> PathBuf {
        self.config.static_dir.join("index.html")
    }
}
