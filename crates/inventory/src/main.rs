use anyhow::{Context, Result, anyhow};
use inventory::{
    config::myconfig::{Config, StoreBackend},
    di::{DependenciesInjectDeps, StoreDeps},
    handler::AppRouter,
    repository::memory::InMemoryStore,
    state::AppState,
};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("inventory-service", is_dev, is_enable_file)
        .context("Failed to initialize logger")?;

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting Inventory Service initialization...");

    let store = match config.store_backend {
        StoreBackend::Postgres => StoreDeps::Postgres(setup_database(&config).await?),
        StoreBackend::Memory => {
            warn!("⚠️ Using the in-memory store, data is lost on shutdown");
            StoreDeps::Memory(InMemoryStore::new())
        }
    };

    let state = AppState::new(DependenciesInjectDeps { store });

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("HTTP server failed")?;

    info!("✅ Inventory Service shutdown complete.");
    Ok(())
}

async fn setup_database(config: &Config) -> Result<ConnectionPool> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow!("DATABASE_URL is required for the postgres store"))?;

    let db_pool =
        ConnectionManager::new_pool(database_url, config.db_min_conn, config.db_max_conn)
            .await
            .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        info!("🗃️ Database migrations applied");
    }

    Ok(db_pool)
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
