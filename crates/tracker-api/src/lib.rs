//! # tracker-api
//!
//! JSON HTTP API built with the Axum framework: match pages, voting and
//! comments, with a cookie-bound voter session.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
