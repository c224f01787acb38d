//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::entities::{Comment, NewComment};
use tracker_core::error::DomainError;
use tracker_core::traits::{CommentRepository, RepoResult};
use tracker_core::value_objects::{CommentId, MatchId, Sentiment};

use crate::models::CommentModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, match_id, username, text, created_at, sentiment
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Comment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_match(&self, match_id: MatchId) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, match_id, username, text, created_at, sentiment
            FROM comments
            WHERE match_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(match_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Comment::try_from).collect()
    }

    #[instrument(skip(self, comment), fields(match_id = %comment.match_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (match_id, username, text, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, match_id, username, text, created_at, sentiment
            "#,
        )
        .bind(comment.match_id.into_inner())
        .bind(&comment.username)
        .bind(&comment.text)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::MatchNotFound(comment.match_id)))?;

        Comment::try_from(model)
    }

    #[instrument(skip(self, username, text))]
    async fn update(
        &self,
        id: CommentId,
        username: &str,
        text: &str,
    ) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            UPDATE comments
            SET username = $2, text = $3
            WHERE id = $1
            RETURNING id, match_id, username, text, created_at, sentiment
            "#,
        )
        .bind(id.into_inner())
        .bind(username)
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Comment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn set_sentiment(&self, id: CommentId, sentiment: Sentiment) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET sentiment = $2 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(sentiment.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<Option<MatchId>> {
        let match_id = sqlx::query_scalar::<_, i64>(
            r#"
            DELETE FROM comments WHERE id = $1
            RETURNING match_id
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(match_id.map(MatchId::new))
    }
}
