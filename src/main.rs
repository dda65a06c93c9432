//! Catalog server: reads settings from the environment (and `.env`), connects to PostgreSQL, serves HTTP.

use catalog_api::{app, cors_layer, AppState, PgCatalog, Settings};
use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("catalog_api=info,sqlx=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let cors = cors_layer(&settings.frontend_host)?;

    let connect_options = PgConnectOptions::from_str(&settings.database_url)?
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, settings.slow_query_threshold);
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(connect_options)
        .await?;

    let state = AppState::new(PgCatalog::new(pool));
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(
        "connected to database, listening on {} (allowed origin {})",
        listener.local_addr()?,
        settings.frontend_host
    );
    axum::serve(listener, app(state, cors)).await?;
    Ok(())
}
