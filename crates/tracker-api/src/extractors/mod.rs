//! Axum extractors for request handling
//!
//! Custom extractors for path ids, request bodies and the voter session.

mod form;
mod path;
mod session;

pub use form::FormOrJson;
pub use path::IdPath;
pub use session::VoterSession;
