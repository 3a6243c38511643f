use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use stats_keeper::config::{Config, SERVER_HOST};
use stats_keeper::server::{self, state::AppState};
use stats_keeper_repository::postgres::MIGRATOR;
use stats_keeper_repository::PostgresStatisticsRepository;
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize environment and logging
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    info!("Starting stats keeper server...");

    if let Err(e) = run().await {
        eprintln!("Server error: {:?}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Database ready");

    let state = AppState {
        repository: Arc::new(PostgresStatisticsRepository::new(pool)),
    };
    let app = server::create_app(state);
    let addr = SocketAddr::from((SERVER_HOST, config.http_port));

    server::run_server(app, addr).await
}
