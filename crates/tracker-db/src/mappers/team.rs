//! Team entity <-> model mapper

use tracker_core::entities::Team;
use tracker_core::value_objects::TeamId;

use crate::models::TeamModel;

impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team::new(TeamId::new(model.id), model.name)
    }
}
