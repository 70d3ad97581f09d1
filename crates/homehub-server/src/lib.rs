// ABOUTME: HTTP server for homehub, exposing device listing, partial updates, and undo.
// ABOUTME: Uses Axum with a shared handle to the hub actor as router state.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, HomehubConfig};
pub use routes::create_router;
