//! Model to entity mappers
//!
//! - `From<Model> for Entity` where every column maps losslessly
//! - `TryFrom<Model> for Entity` where a column is narrowed to a domain type
//!   (slot position, session key, sentiment label); a row that does not fit
//!   is reported as a database error

mod comment;
mod match_team;
mod matches;
mod team;
mod vote;

use tracker_core::DomainError;

/// Error for a row whose column does not fit its domain type
pub(crate) fn corrupt_row(table: &str, detail: impl std::fmt::Display) -> DomainError {
    DomainError::DatabaseError(format!("corrupt {table} row: {detail}"))
}
