//! Value objects - immutable types that represent domain concepts

mod field_errors;
mod ids;
mod sentiment;
mod session;
mod slot;
mod tally;

pub use field_errors::FieldErrors;
pub use ids::{CommentId, IdParseError, MatchId, MatchTeamId, TeamId};
pub use sentiment::{Sentiment, UnknownSentiment};
pub use session::{InvalidSessionKey, SessionKey, SESSION_KEY_MAX_LEN};
pub use slot::{InvalidSlot, Slot};
pub use tally::{VoteShares, VoteTally};
