//! Service context - dependency container for services
//!
//! Holds the repositories, the store health probe and the optional sentiment
//! classifier.

use std::sync::Arc;

use tracker_core::traits::{
    CommentRepository, MatchRepository, MatchTeamRepository, SentimentClassifier, StoreHealth,
    TeamRepository, VoteRepository,
};
use tracker_db::{
    MemoryStore, PgCommentRepository, PgMatchRepository, PgMatchTeamRepository, PgPool,
    PgStoreHealth, PgTeamRepository, PgVoteRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    team_repo: Arc<dyn TeamRepository>,
    match_repo: Arc<dyn MatchRepository>,
    match_team_repo: Arc<dyn MatchTeamRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    comment_repo: Arc<dyn CommentRepository>,

    store_health: Arc<dyn StoreHealth>,

    // Absent when no sentiment API token is configured
    classifier: Option<Arc<dyn SentimentClassifier>>,
}

impl ServiceContext {
    /// Context backed by PostgreSQL repositories
    pub fn postgres(pool: PgPool, classifier: Option<Arc<dyn SentimentClassifier>>) -> Self {
        Self {
            team_repo: Arc::new(PgTeamRepository::new(pool.clone())),
            match_repo: Arc::new(PgMatchRepository::new(pool.clone())),
            match_team_repo: Arc::new(PgMatchTeamRepository::new(pool.clone())),
            vote_repo: Arc::new(PgVoteRepository::new(pool.clone())),
            comment_repo: Arc::new(PgCommentRepository::new(pool.clone())),
            store_health: Arc::new(PgStoreHealth::new(pool)),
            classifier,
        }
    }

    /// Context backed by one in-memory store
    pub fn in_memory(
        store: Arc<MemoryStore>,
        classifier: Option<Arc<dyn SentimentClassifier>>,
    ) -> Self {
        Self {
            team_repo: store.clone(),
            match_repo: store.clone(),
            match_team_repo: store.clone(),
            vote_repo: store.clone(),
            comment_repo: store.clone(),
            store_health: store,
            classifier,
        }
    }

    // === Repositories ===

    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    pub fn match_repo(&self) -> &dyn MatchRepository {
        self.match_repo.as_ref()
    }

    pub fn match_team_repo(&self) -> &dyn MatchTeamRepository {
        self.match_team_repo.as_ref()
    }

    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the store health probe
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    /// Get the sentiment classifier, if one is installed
    pub fn classifier(&self) -> Option<&dyn SentimentClassifier> {
        self.classifier.as_deref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("backend", &self.store_health.backend())
            .field("repositories", &"...")
            .field("classifier", &self.classifier.is_some())
            .finish()
    }
}

/// Builder for creating ServiceContext from individual repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    team_repo: Option<Arc<dyn TeamRepository>>,
    match_repo: Option<Arc<dyn MatchRepository>>,
    match_team_repo: Option<Arc<dyn MatchTeamRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    classifier: Option<Arc<dyn SentimentClassifier>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn match_repo(mut self, repo: Arc<dyn MatchRepository>) -> Self {
        self.match_repo = Some(repo);
        self
    }

    pub fn match_team_repo(mut self, repo: Arc<dyn MatchTeamRepository>) -> Self {
        self.match_team_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    pub fn classifier(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Config` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::config(format!("{name} is required")))
        }

        Ok(ServiceContext {
            team_repo: required(self.team_repo, "team_repo")?,
            match_repo: required(self.match_repo, "match_repo")?,
            match_team_repo: required(self.match_team_repo, "match_team_repo")?,
            vote_repo: required(self.vote_repo, "vote_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            store_health: required(self.store_health, "store_health")?,
            classifier: self.classifier,
        })
    }
}
