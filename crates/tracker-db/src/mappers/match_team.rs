//! MatchTeam entity <-> model mapper

use tracker_core::entities::{MatchTeam, MatchTeamWithName};
use tracker_core::error::DomainError;
use tracker_core::value_objects::{MatchId, MatchTeamId, Slot, TeamId};

use crate::models::{MatchTeamModel, MatchTeamWithNameModel};

use super::corrupt_row;

fn build(
    id: i64,
    match_id: i64,
    team_id: i64,
    position: i16,
    votes: i32,
) -> Result<MatchTeam, DomainError> {
    let slot = Slot::try_from(position).map_err(|e| corrupt_row("match_teams", e))?;
    let votes = u32::try_from(votes).map_err(|e| corrupt_row("match_teams", e))?;

    Ok(MatchTeam {
        id: MatchTeamId::new(id),
        match_id: MatchId::new(match_id),
        team_id: TeamId::new(team_id),
        slot,
        votes,
    })
}

impl TryFrom<MatchTeamModel> for MatchTeam {
    type Error = DomainError;

    fn try_from(model: MatchTeamModel) -> Result<Self, Self::Error> {
        build(model.id, model.match_id, model.team_id, model.position, model.votes)
    }
}

impl TryFrom<MatchTeamWithNameModel> for MatchTeamWithName {
    type Error = DomainError;

    fn try_from(model: MatchTeamWithNameModel) -> Result<Self, Self::Error> {
        Ok(MatchTeamWithName {
            entry: build(model.id, model.match_id, model.team_id, model.position, model.votes)?,
            team_name: model.team_name,
        })
    }
}
