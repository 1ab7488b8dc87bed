//! Database pool setup and schema migrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called once at startup, before the listener binds: the storefront serves
//! no request until the pool is live and the `users`/`sessions`/`orders`
//! schema is current.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Read an env var as a `u32`, falling back to `default` when unset,
/// empty, or unparseable.
fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// Pool size comes from `DB_MAX_CONNECTIONS` (default 5).
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let max_connections = env_u32("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS);
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
