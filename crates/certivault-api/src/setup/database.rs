//! Database setup and store selection

use anyhow::{Context, Result};
use certivault_core::{CertificateStore, Config, IssuerStore, StoreBackend};
use certivault_db::{CertificateRepository, IssuerRepository, MemoryStore};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type Stores = (Arc<dyn CertificateStore>, Arc<dyn IssuerStore>);

/// Build the certificate and issuer stores for the configured backend.
pub async fn setup_stores(config: &Config) -> Result<Stores> {
    match config.store_backend() {
        StoreBackend::Postgres => {
            let pool = setup_database(config).await?;
            Ok((
                Arc::new(CertificateRepository::new(pool.clone())),
                Arc::new(IssuerRepository::new(pool)),
            ))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            let store = MemoryStore::new();
            Ok((Arc::new(store.clone()), Arc::new(store)))
        }
    }
}

/// Setup database connection pool and run migrations
pub async fn setup_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url()
        .context("DATABASE_URL is required for the postgres store backend")?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections(),
        "Database connected successfully"
    );

    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    let migrator = sqlx::migrate::Migrator::new(migrations_dir)
        .await
        .context("Failed to load migrations")?;
    migrator
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
