//! Comment entity <-> model mapper

use tracker_core::entities::Comment;
use tracker_core::error::DomainError;
use tracker_core::value_objects::{CommentId, MatchId, Sentiment};

use crate::models::CommentModel;

use super::corrupt_row;

impl TryFrom<CommentModel> for Comment {
    type Error = DomainError;

    fn try_from(model: CommentModel) -> Result<Self, Self::Error> {
        let sentiment = model
            .sentiment
            .as_deref()
            .map(str::parse::<Sentiment>)
            .transpose()
            .map_err(|e| corrupt_row("comments", e))?;

        Ok(Comment {
            id: CommentId::new(model.id),
            match_id: MatchId::new(model.match_id),
            username: model.username,
            text: model.text,
            created_at: model.created_at,
            sentiment,
        })
    }
}
