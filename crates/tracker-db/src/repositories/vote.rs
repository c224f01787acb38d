//! PostgreSQL implementation of VoteRepository
//!
//! Binding and counter change commit in one transaction. The
//! `(session_key, match_id)` unique constraint decides which of two
//! concurrent casts from one session wins.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::entities::{CancelOutcome, MatchTeam, VoteBinding};
use tracker_core::error::DomainError;
use tracker_core::traits::{RepoResult, VoteRepository};
use tracker_core::value_objects::{MatchId, MatchTeamId, SessionKey};

use crate::models::VoteModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        session: &SessionKey,
        match_id: MatchId,
    ) -> RepoResult<Option<VoteBinding>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT session_key, match_id, match_team_id, created_at
            FROM votes
            WHERE session_key = $1 AND match_id = $2
            "#,
        )
        .bind(session.as_str())
        .bind(match_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(VoteBinding::try_from).transpose()
    }

    #[instrument(skip(self, slot), fields(match_id = %slot.match_id, position = %slot.slot))]
    async fn cast(&self, session: &SessionKey, slot: &MatchTeam) -> RepoResult<VoteBinding> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query_as::<_, VoteModel>(
            r#"
            INSERT INTO votes (session_key, match_id, match_team_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (session_key, match_id) DO NOTHING
            RETURNING session_key, match_id, match_team_id, created_at
            "#,
        )
        .bind(session.as_str())
        .bind(slot.match_id.into_inner())
        .bind(slot.id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::slot_not_found(slot.match_id, slot.slot))
        })?;

        let Some(binding) = inserted else {
            return Err(DomainError::AlreadyVoted {
                match_id: slot.match_id,
            });
        };

        let updated = sqlx::query(
            r#"
            UPDATE match_teams SET votes = votes + 1
            WHERE id = $1 AND match_id = $2
            "#,
        )
        .bind(slot.id.into_inner())
        .bind(slot.match_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::slot_not_found(slot.match_id, slot.slot));
        }

        tx.commit().await.map_err(map_db_error)?;

        VoteBinding::try_from(binding)
    }

    #[instrument(skip(self))]
    async fn cancel(&self, session: &SessionKey, match_id: MatchId) -> RepoResult<CancelOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let deleted = sqlx::query_scalar::<_, Option<i64>>(
            r#"
            DELETE FROM votes
            WHERE session_key = $1 AND match_id = $2
            RETURNING match_team_id
            "#,
        )
        .bind(session.as_str())
        .bind(match_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let outcome = match deleted {
            None => return Err(DomainError::NoActiveVote { match_id }),
            Some(None) => CancelOutcome::Stale,
            Some(Some(id)) => {
                let updated = sqlx::query(
                    r#"
                    UPDATE match_teams SET votes = GREATEST(votes - 1, 0)
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                if updated.rows_affected() == 0 {
                    CancelOutcome::Stale
                } else {
                    CancelOutcome::Cancelled {
                        match_team_id: MatchTeamId::new(id),
                    }
                }
            }
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(outcome)
    }
}
