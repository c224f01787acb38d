//! Integration test utilities for the match tracker
//!
//! This crate provides helpers for running end-to-end tests against the
//! JSON API with an in-memory store and a stubbed sentiment API.

pub mod fixtures;
pub mod helpers;
pub mod sentiment_stub;

pub use fixtures::*;
pub use helpers::*;
pub use sentiment_stub::{SentimentStub, StubReply};
