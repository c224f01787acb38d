//! Match entity - a scheduled esports match

use chrono::{DateTime, Utc};

use crate::value_objects::MatchId;

/// Match entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub event_name: String,
    pub scheduled_time: DateTime<Utc>,
}

impl Match {
    /// Create a new Match
    pub fn new(id: MatchId, event_name: impl Into<String>, scheduled_time: DateTime<Utc>) -> Self {
        Self {
            id,
            event_name: event_name.into(),
            scheduled_time,
        }
    }

    /// Human readable label, e.g. for log lines
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.event_name,
            self.scheduled_time.format("%d/%m/%Y %H:%M")
        )
    }
}

/// Values for inserting a match (the id is assigned by the store)
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub event_name: String,
    pub scheduled_time: DateTime<Utc>,
}
