//! # tracker-service
//!
//! Application layer: the vote coordinator, the comment workflow, the match
//! read model, the HTTP sentiment classifier and the DTOs they return.

pub mod dto;
pub mod sentiment;
pub mod services;

pub use sentiment::{ClassifierError, HttpSentimentClassifier};
pub use services::{
    CommentService, DeleteOutcome, MatchService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, VoteService,
};
