//! MatchTeam entity - a team placed in one slot of a match

use crate::value_objects::{MatchId, MatchTeamId, Slot, TeamId};

/// A team's slot within a match, carrying the slot's vote counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTeam {
    pub id: MatchTeamId,
    pub match_id: MatchId,
    pub team_id: TeamId,
    pub slot: Slot,
    pub votes: u32,
}

impl MatchTeam {
    pub fn new(id: MatchTeamId, match_id: MatchId, team_id: TeamId, slot: Slot) -> Self {
        Self {
            id,
            match_id,
            team_id,
            slot,
            votes: 0,
        }
    }
}

/// A slot joined with its team's display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTeamWithName {
    pub entry: MatchTeam,
    pub team_name: String,
}
