use anyhow::Context;
use tracing_subscriber::EnvFilter;

use triplens::config::AppConfig;
use triplens::db;
use triplens::engine::Engine;
use triplens::server::serve;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let pool = db::connect(&config.database_url, config.db_max_connections)
        .await
        .with_context(|| format!("failed to open dataset at {}", config.database_url))?;
    tracing::info!("connected to {}", config.database_url);

    let engine = Engine::new(pool);

    serve(engine, config.bind_addr).await
}
