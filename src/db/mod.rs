/// Database access layer
///
/// Provides connection pooling and repository functions for recipes and
/// profiles. Repositories are free functions over `PgPool`, one module per
/// table.
pub mod profile_repo;
pub mod recipe_repo;

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Create the Postgres connection pool.
///
/// Connections are established lazily so the service can come up (and serve
/// the fallback landing page) while the database is still unreachable.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(&config.url)
}

/// Run the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
