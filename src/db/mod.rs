use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn get_db_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let mut options = SqlitePoolOptions::new().max_connections(config.max_connections);

    // Every connection to `:memory:` is its own database, so keep exactly one alive.
    if config.is_in_memory() {
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = options.connect(&config.url).await?;
    Ok(pool)
}

/// Creates the `guests` and `rooms` tables if they do not exist yet.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// In-memory pool with the schema applied.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = get_db_pool(&DatabaseConfig::in_memory()).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
