//! VoteBinding entity <-> model mapper

use tracker_core::entities::VoteBinding;
use tracker_core::error::DomainError;
use tracker_core::value_objects::{MatchId, MatchTeamId, SessionKey};

use crate::models::VoteModel;

use super::corrupt_row;

impl TryFrom<VoteModel> for VoteBinding {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        Ok(VoteBinding {
            session: SessionKey::parse(model.session_key).map_err(|e| corrupt_row("votes", e))?,
            match_id: MatchId::new(model.match_id),
            match_team_id: model.match_team_id.map(MatchTeamId::new),
            created_at: model.created_at,
        })
    }
}
