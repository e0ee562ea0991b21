//! Chat page HTML.
//!
//! One page with a conversation sidebar (new, select, delete), the message
//! list, a "Thinking..." indicator and the input box. All state comes from
//! the JSON API; the page keeps no conversation data of its own.

/// The complete self-contained chat page.
pub const CHAT_HTML: &str = include_str!("../assets/chat.html");
