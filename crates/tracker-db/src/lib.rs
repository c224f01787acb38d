//! # tracker-db
//!
//! Storage layer implementing the tracker-core repository traits.
//!
//! ## Overview
//!
//! - Connection pool management and SQL migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - [`MemoryStore`], an in-process implementation with the same semantics
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tracker_db::{connect, PgMatchRepository, PoolSettings};
//! use tracker_core::traits::MatchRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = PoolSettings::new("postgres://localhost/tracker");
//!     let pool = connect(&settings, true).await?;
//!     let matches = PgMatchRepository::new(pool).list().await?;
//!     Ok(())
//! }
//! ```

mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{connect, create_pool, run_migrations, PgPool, PoolSettings};
pub use repositories::{
    PgCommentRepository, PgMatchRepository, PgMatchTeamRepository, PgStoreHealth,
    PgTeamRepository, PgVoteRepository,
};
