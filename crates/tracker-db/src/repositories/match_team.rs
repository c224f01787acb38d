//! PostgreSQL implementation of MatchTeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::entities::{MatchTeam, MatchTeamWithName};
use tracker_core::error::DomainError;
use tracker_core::traits::{MatchTeamRepository, RepoResult};
use tracker_core::value_objects::{FieldErrors, MatchId, Slot, TeamId};

use crate::models::{MatchTeamModel, MatchTeamWithNameModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MatchTeamRepository
#[derive(Clone)]
pub struct PgMatchTeamRepository {
    pool: PgPool,
}

impl PgMatchTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchTeamRepository for PgMatchTeamRepository {
    #[instrument(skip(self))]
    async fn find_by_match(&self, match_id: MatchId) -> RepoResult<Vec<MatchTeamWithName>> {
        let results = sqlx::query_as::<_, MatchTeamWithNameModel>(
            r#"
            SELECT mt.id, mt.match_id, mt.team_id, mt.position, mt.votes, t.name AS team_name
            FROM match_teams mt
            INNER JOIN teams t ON t.id = mt.team_id
            WHERE mt.match_id = $1
            ORDER BY mt.position
            "#,
        )
        .bind(match_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(MatchTeamWithName::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_slot(&self, match_id: MatchId, slot: Slot) -> RepoResult<Option<MatchTeam>> {
        let result = sqlx::query_as::<_, MatchTeamModel>(
            r#"
            SELECT id, match_id, team_id, position, votes
            FROM match_teams
            WHERE match_id = $1 AND position = $2
            "#,
        )
        .bind(match_id.into_inner())
        .bind(slot.position())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MatchTeam::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn assign(
        &self,
        match_id: MatchId,
        team_id: TeamId,
        slot: Slot,
    ) -> RepoResult<MatchTeam> {
        let model = sqlx::query_as::<_, MatchTeamModel>(
            r#"
            INSERT INTO match_teams (match_id, team_id, position)
            VALUES ($1, $2, $3)
            RETURNING id, match_id, team_id, position, votes
            "#,
        )
        .bind(match_id.into_inner())
        .bind(team_id.into_inner())
        .bind(slot.position())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::Validation(
                    FieldErrors::new().with("position", "This slot already has a team."),
                )
            })
        })?;

        MatchTeam::try_from(model)
    }

    #[instrument(skip(self))]
    async fn remove(&self, match_id: MatchId, slot: Slot) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM match_teams WHERE match_id = $1 AND position = $2
            "#,
        )
        .bind(match_id.into_inner())
        .bind(slot.position())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
