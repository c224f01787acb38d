//! Database connection pool management

mod postgres;

pub use postgres::{connect, create_pool, run_migrations, PoolSettings, MIGRATIONS_DIR};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
