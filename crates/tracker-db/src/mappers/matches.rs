//! Match entity <-> model mapper

use tracker_core::entities::Match;
use tracker_core::value_objects::MatchId;

use crate::models::MatchModel;

impl From<MatchModel> for Match {
    fn from(model: MatchModel) -> Self {
        Match::new(MatchId::new(model.id), model.event_name, model.scheduled_time)
    }
}
