//! In-memory store
//!
//! Implements every repository trait over one mutex-guarded state, with the
//! same constraint and cascade behavior as the PostgreSQL schema. Used when no
//! database is configured and as the backing store in tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use tracker_core::entities::{
    CancelOutcome, Comment, Match, MatchTeam, MatchTeamWithName, NewComment, NewMatch, Team,
    VoteBinding,
};
use tracker_core::error::DomainError;
use tracker_core::traits::{
    CommentRepository, MatchRepository, MatchTeamRepository, RepoResult, StoreHealth,
    TeamRepository, VoteRepository,
};
use tracker_core::value_objects::{
    CommentId, FieldErrors, MatchId, MatchTeamId, Sentiment, SessionKey, Slot, TeamId,
};

#[derive(Default)]
struct State {
    last_id: i64,
    teams: BTreeMap<TeamId, Team>,
    matches: BTreeMap<MatchId, Match>,
    match_teams: BTreeMap<MatchTeamId, MatchTeam>,
    votes: HashMap<(SessionKey, MatchId), VoteBinding>,
    comments: BTreeMap<CommentId, Comment>,
}

impl State {
    // One sequence for every table keeps ids unique and increasing.
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn slot(&self, match_id: MatchId, slot: Slot) -> Option<&MatchTeam> {
        self.match_teams
            .values()
            .find(|mt| mt.match_id == match_id && mt.slot == slot)
    }
}

/// Mutex-guarded store implementing all repository traits
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a match with two freshly created teams in slots 1 and 2
    pub fn seed_match(
        &self,
        event_name: &str,
        scheduled_time: DateTime<Utc>,
        teams: (&str, &str),
    ) -> (Match, [MatchTeam; 2]) {
        let mut state = self.state.lock();

        let match_id = MatchId::new(state.next_id());
        let entity = Match::new(match_id, event_name, scheduled_time);
        state.matches.insert(match_id, entity.clone());

        let mut seat = |name: &str, slot: Slot| {
            let team_id = TeamId::new(state.next_id());
            state.teams.insert(team_id, Team::new(team_id, name));
            let entry = MatchTeam::new(MatchTeamId::new(state.next_id()), match_id, team_id, slot);
            state.match_teams.insert(entry.id, entry.clone());
            entry
        };

        let one = seat(teams.0, Slot::One);
        let two = seat(teams.1, Slot::Two);
        (entity, [one, two])
    }

    /// Overwrite a slot counter (fixtures only)
    pub fn set_votes(&self, match_id: MatchId, slot: Slot, votes: u32) -> bool {
        let mut state = self.state.lock();
        let id = state.slot(match_id, slot).map(|mt| mt.id);
        match id.and_then(|id| state.match_teams.get_mut(&id)) {
            Some(entry) => {
                entry.votes = votes;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl TeamRepository for MemoryStore {
    async fn find_by_id(&self, id: TeamId) -> RepoResult<Option<Team>> {
        Ok(self.state.lock().teams.get(&id).cloned())
    }

    async fn create(&self, name: &str) -> RepoResult<Team> {
        let mut state = self.state.lock();
        let team = Team::new(TeamId::new(state.next_id()), name);
        state.teams.insert(team.id, team.clone());
        Ok(team)
    }
}

#[async_trait]
impl MatchRepository for MemoryStore {
    async fn find_by_id(&self, id: MatchId) -> RepoResult<Option<Match>> {
        Ok(self.state.lock().matches.get(&id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Match>> {
        let mut matches: Vec<Match> = self.state.lock().matches.values().cloned().collect();
        matches.sort_by(|a, b| {
            a.scheduled_time
                .cmp(&b.scheduled_time)
                .then(a.id.cmp(&b.id))
        });
        Ok(matches)
    }

    async fn create(&self, new_match: &NewMatch) -> RepoResult<Match> {
        let mut state = self.state.lock();
        let entity = Match::new(
            MatchId::new(state.next_id()),
            new_match.event_name.clone(),
            new_match.scheduled_time,
        );
        state.matches.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: MatchId) -> RepoResult<bool> {
        let mut state = self.state.lock();
        if state.matches.remove(&id).is_none() {
            return Ok(false);
        }
        state.match_teams.retain(|_, mt| mt.match_id != id);
        state.votes.retain(|(_, match_id), _| *match_id != id);
        state.comments.retain(|_, c| c.match_id != id);
        Ok(true)
    }
}

#[async_trait]
impl MatchTeamRepository for MemoryStore {
    async fn find_by_match(&self, match_id: MatchId) -> RepoResult<Vec<MatchTeamWithName>> {
        let state = self.state.lock();
        let mut entries: Vec<MatchTeamWithName> = state
            .match_teams
            .values()
            .filter(|mt| mt.match_id == match_id)
            .filter_map(|mt| {
                state.teams.get(&mt.team_id).map(|team| MatchTeamWithName {
                    entry: mt.clone(),
                    team_name: team.name.clone(),
                })
            })
            .collect();
        entries.sort_by_key(|e| e.entry.slot);
        Ok(entries)
    }

    async fn find_slot(&self, match_id: MatchId, slot: Slot) -> RepoResult<Option<MatchTeam>> {
        Ok(self.state.lock().slot(match_id, slot).cloned())
    }

    async fn assign(
        &self,
        match_id: MatchId,
        team_id: TeamId,
        slot: Slot,
    ) -> RepoResult<MatchTeam> {
        let mut state = self.state.lock();
        if !state.matches.contains_key(&match_id) || !state.teams.contains_key(&team_id) {
            return Err(DomainError::Validation(
                FieldErrors::new().with("team_id", "Unknown match or team."),
            ));
        }
        if state.slot(match_id, slot).is_some() {
            return Err(DomainError::Validation(
                FieldErrors::new().with("position", "This slot already has a team."),
            ));
        }
        let entry = MatchTeam::new(MatchTeamId::new(state.next_id()), match_id, team_id, slot);
        state.match_teams.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn remove(&self, match_id: MatchId, slot: Slot) -> RepoResult<bool> {
        let mut state = self.state.lock();
        let Some(id) = state.slot(match_id, slot).map(|mt| mt.id) else {
            return Ok(false);
        };
        state.match_teams.remove(&id);
        for binding in state.votes.values_mut() {
            if binding.match_team_id == Some(id) {
                binding.match_team_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    async fn find(
        &self,
        session: &SessionKey,
        match_id: MatchId,
    ) -> RepoResult<Option<VoteBinding>> {
        let key = (session.clone(), match_id);
        Ok(self.state.lock().votes.get(&key).cloned())
    }

    async fn cast(&self, session: &SessionKey, slot: &MatchTeam) -> RepoResult<VoteBinding> {
        let mut state = self.state.lock();
        let key = (session.clone(), slot.match_id);

        if !state
            .match_teams
            .get(&slot.id)
            .is_some_and(|mt| mt.match_id == slot.match_id)
        {
            return Err(DomainError::slot_not_found(slot.match_id, slot.slot));
        }
        if state.votes.contains_key(&key) {
            return Err(DomainError::AlreadyVoted {
                match_id: slot.match_id,
            });
        }

        if let Some(entry) = state.match_teams.get_mut(&slot.id) {
            entry.votes = entry.votes.saturating_add(1);
        }
        let binding = VoteBinding::new(session.clone(), slot.match_id, slot.id);
        state.votes.insert(key, binding.clone());
        Ok(binding)
    }

    async fn cancel(&self, session: &SessionKey, match_id: MatchId) -> RepoResult<CancelOutcome> {
        let mut state = self.state.lock();
        let binding = state
            .votes
            .remove(&(session.clone(), match_id))
            .ok_or(DomainError::NoActiveVote { match_id })?;

        let entry = binding
            .match_team_id
            .and_then(|id| state.match_teams.get_mut(&id));

        Ok(match entry {
            Some(entry) => {
                entry.votes = entry.votes.saturating_sub(1);
                CancelOutcome::Cancelled {
                    match_team_id: entry.id,
                }
            }
            None => CancelOutcome::Stale,
        })
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        Ok(self.state.lock().comments.get(&id).cloned())
    }

    async fn find_by_match(&self, match_id: MatchId) -> RepoResult<Vec<Comment>> {
        Ok(self
            .state
            .lock()
            .comments
            .values()
            .rev()
            .filter(|c| c.match_id == match_id)
            .cloned()
            .collect())
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut state = self.state.lock();
        if !state.matches.contains_key(&comment.match_id) {
            return Err(DomainError::MatchNotFound(comment.match_id));
        }
        let entity = Comment {
            id: CommentId::new(state.next_id()),
            match_id: comment.match_id,
            username: comment.username.clone(),
            text: comment.text.clone(),
            created_at: comment.created_at,
            sentiment: None,
        };
        state.comments.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(
        &self,
        id: CommentId,
        username: &str,
        text: &str,
    ) -> RepoResult<Option<Comment>> {
        let mut state = self.state.lock();
        Ok(state.comments.get_mut(&id).map(|comment| {
            comment.username = username.to_string();
            comment.text = text.to_string();
            comment.clone()
        }))
    }

    async fn set_sentiment(&self, id: CommentId, sentiment: Sentiment) -> RepoResult<bool> {
        let mut state = self.state.lock();
        Ok(state
            .comments
            .get_mut(&id)
            .map(|comment| comment.sentiment = Some(sentiment))
            .is_some())
    }

    async fn delete(&self, id: CommentId) -> RepoResult<Option<MatchId>> {
        Ok(self.state.lock().comments.remove(&id).map(|c| c.match_id))
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
