//! MindScope UI crate - the embedded chat page.
//!
//! The page is a single HTML file with CSS and JavaScript inline, embedded at
//! compile time via `include_str!`. It talks to the `/api` routes of
//! `mindscope-api` on the same origin.
//!
//! ```rust,ignore
//! use mindscope_ui::chat::CHAT_HTML;
//!
//! async fn ui_handler() -> axum::response::Html<&'static str> {
//!     axum::response::Html(CHAT_HTML)
//! }
//! ```

pub mod chat;
