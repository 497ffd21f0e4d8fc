use std::sync::Arc;

use wiki_api_rust::database::DatabaseManager;
use wiki_api_rust::wiki::{PgNodeStore, SharedNodeStore};
use wiki_api_rust::{config, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting wiki API in {:?} mode", config.environment);

    let pool = DatabaseManager::pool().await?;
    let store: SharedNodeStore = Arc::new(PgNodeStore::new(pool));
    let app = handlers::app(store);

    // Allow tests or deployments to override port via env
    let port = std::env::var("WIKI_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("wiki API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
