//! # card-web
//!
//! Web server built with Axum. Renders the member card, notices and player
//! pages, and serves the same view models as JSON.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
