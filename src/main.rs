use std::sync::Arc;

use anyhow::Context;

use inventory_api::database::postgres::{PgProductRepository, PgUserRepository};
use inventory_api::state::AppState;
use inventory_api::{app, config, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting inventory API in {:?} mode", config.environment);

    let pool = database::manager::connect()
        .await
        .context("failed to connect to database")?;
    database::manager::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let state = AppState {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        products: Arc::new(PgProductRepository::new(pool)),
    };

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Inventory API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;
    Ok(())
}
