//! PostgreSQL implementation of MatchRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::entities::{Match, NewMatch};
use tracker_core::traits::{MatchRepository, RepoResult};
use tracker_core::value_objects::MatchId;

use crate::models::MatchModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MatchRepository
#[derive(Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MatchId) -> RepoResult<Option<Match>> {
        let result = sqlx::query_as::<_, MatchModel>(
            r#"
            SELECT id, event_name, scheduled_time
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Match::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Match>> {
        let results = sqlx::query_as::<_, MatchModel>(
            r#"
            SELECT id, event_name, scheduled_time
            FROM matches
            ORDER BY scheduled_time, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Match::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, new_match: &NewMatch) -> RepoResult<Match> {
        let model = sqlx::query_as::<_, MatchModel>(
            r#"
            INSERT INTO matches (event_name, scheduled_time)
            VALUES ($1, $2)
            RETURNING id, event_name, scheduled_time
            "#,
        )
        .bind(&new_match.event_name)
        .bind(new_match.scheduled_time)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Match::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MatchId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM matches WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
