//! MindScope API crate - axum HTTP server and route handlers.
//!
//! Serves the chat page and a JSON API over the single chat session:
//! conversation management, message submission and health checks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
