mod api_doc;
mod config;
mod error;
mod forward;
mod handlers;
mod models;
mod routes;
mod server;
mod state;

use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("spa-gateway starting");

    let config = Config::from_env()?;
    config.log_startup();

    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {}; client routes will return 404 until the SPA is built",
            config.static_dir.display()
        );
    }

    server::run(AppState::new(config)).await
}
