use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use lexhook::config::AppConfig;
use lexhook::db;
use lexhook::services::store::sqlite::SqliteStore;
use lexhook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    let store = SqliteStore::new(Arc::new(Mutex::new(conn)));

    tracing::info!(
        database = %config.database_url,
        timezone = %config.display_timezone,
        "record store ready"
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        store: Box::new(store),
    });

    let app = lexhook::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
