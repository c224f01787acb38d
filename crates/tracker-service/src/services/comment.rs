//! Comment service
//!
//! Create, edit, delete and list match comments. New comments are tagged
//! with a sentiment label after they are stored.

use tracing::{debug, info, instrument, warn};
use tracker_core::entities::{Comment, NewComment};
use tracker_core::{CommentId, DomainError, MatchId};
use validator::Validate;

use crate::dto::{CommentForm, CommentListResponse, CommentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The comment existed and was removed
    Deleted { match_id: MatchId },
    /// Nothing to delete
    AlreadyAbsent,
}

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a comment on a match
    ///
    /// Classification runs after the insert and never fails the request.
    ///
    /// # Errors
    /// `MatchNotFound`, or `Validation` with every offending field
    #[instrument(skip(self, form))]
    pub async fn create_comment(
        &self,
        match_id: MatchId,
        form: CommentForm,
    ) -> ServiceResult<CommentResponse> {
        self.ctx
            .match_repo()
            .find_by_id(match_id)
            .await?
            .ok_or(DomainError::MatchNotFound(match_id))?;

        let form = form.trimmed();
        form.validate()?;

        let mut comment = self
            .ctx
            .comment_repo()
            .create(&NewComment::new(match_id, form.username, form.text))
            .await?;

        info!(
            comment_id = %comment.id,
            match_id = %match_id,
            username = %comment.username,
            "Comment created"
        );

        self.tag_sentiment(&mut comment).await;

        Ok(CommentResponse::from(comment))
    }

    /// Replace username and text of a comment
    ///
    /// The stored sentiment is kept as is.
    ///
    /// # Errors
    /// `CommentNotFound`, or `Validation`
    #[instrument(skip(self, form))]
    pub async fn edit_comment(
        &self,
        comment_id: CommentId,
        form: CommentForm,
    ) -> ServiceResult<CommentResponse> {
        let form = form.trimmed();
        if let Err(errors) = form.validate() {
            // Unknown ids win over field errors
            self.get_comment(comment_id).await?;
            return Err(errors.into());
        }

        let comment = self
            .ctx
            .comment_repo()
            .update(comment_id, &form.username, &form.text)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        info!(comment_id = %comment_id, match_id = %comment.match_id, "Comment edited");

        Ok(CommentResponse::from(comment))
    }

    /// Delete a comment; deleting a missing comment is not an error
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: CommentId) -> ServiceResult<DeleteOutcome> {
        match self.ctx.comment_repo().delete(comment_id).await? {
            Some(match_id) => {
                info!(comment_id = %comment_id, match_id = %match_id, "Comment deleted");
                Ok(DeleteOutcome::Deleted { match_id })
            }
            None => {
                debug!(comment_id = %comment_id, "Comment already absent");
                Ok(DeleteOutcome::AlreadyAbsent)
            }
        }
    }

    /// Get a single comment
    #[instrument(skip(self))]
    pub async fn get_comment(&self, comment_id: CommentId) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;
        Ok(CommentResponse::from(comment))
    }

    /// Comments of a match, newest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, match_id: MatchId) -> ServiceResult<CommentListResponse> {
        self.ctx
            .match_repo()
            .find_by_id(match_id)
            .await?
            .ok_or(DomainError::MatchNotFound(match_id))?;

        Ok(CommentListResponse {
            comments: self.load_comments(match_id).await?,
        })
    }

    pub(crate) async fn load_comments(
        &self,
        match_id: MatchId,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_match(match_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    async fn tag_sentiment(&self, comment: &mut Comment) {
        let Some(classifier) = self.ctx.classifier() else {
            return;
        };

        let sentiment = classifier.classify(&comment.text).await;
        match self
            .ctx
            .comment_repo()
            .set_sentiment(comment.id, sentiment)
            .await
        {
            Ok(true) => {
                debug!(comment_id = %comment.id, sentiment = %sentiment, "Sentiment stored");
                comment.sentiment = Some(sentiment);
            }
            Ok(false) => {
                warn!(comment_id = %comment.id, "Comment vanished before sentiment was stored");
            }
            Err(error) => {
                warn!(comment_id = %comment.id, %error, "Failed to store sentiment");
            }
        }
    }
}
