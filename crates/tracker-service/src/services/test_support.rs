//! Shared fixtures for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracker_core::entities::{Match, MatchTeam};
use tracker_core::{Sentiment, SentimentClassifier, SessionKey};
use tracker_db::MemoryStore;

use super::context::ServiceContext;

/// Classifier answering a fixed label and counting calls
pub(crate) struct FixedClassifier {
    answer: Sentiment,
    calls: AtomicUsize,
}

impl FixedClassifier {
    pub(crate) fn new(answer: Sentiment) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> Sentiment {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// In-memory context without a classifier
pub(crate) fn memory_ctx() -> (Arc<MemoryStore>, ServiceContext) {
    let store = Arc::new(MemoryStore::new());
    let ctx = ServiceContext::in_memory(store.clone(), None);
    (store, ctx)
}

/// In-memory context with the given classifier
pub(crate) fn memory_ctx_with(
    classifier: Arc<dyn SentimentClassifier>,
) -> (Arc<MemoryStore>, ServiceContext) {
    let store = Arc::new(MemoryStore::new());
    let ctx = ServiceContext::in_memory(store.clone(), Some(classifier));
    (store, ctx)
}

/// NaVi vs FaZe, no votes yet
pub(crate) fn seeded_match(store: &MemoryStore) -> (Match, [MatchTeam; 2]) {
    store.seed_match("IEM Katowice", Utc::now(), ("NaVi", "FaZe"))
}

pub(crate) fn session(name: &str) -> SessionKey {
    SessionKey::parse(name).unwrap()
}
