//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and return DTOs or domain outcomes.

pub mod comment;
pub mod context;
pub mod error;
pub mod matches;
pub mod vote;

// Re-export all services for convenience
pub use comment::{CommentService, DeleteOutcome};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use matches::MatchService;
pub use vote::VoteService;

#[cfg(test)]
pub(crate) mod test_support;
