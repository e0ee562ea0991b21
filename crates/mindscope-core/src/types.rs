use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to a conversation before its first message.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Maximum number of characters of the first message kept in a title.
pub const TITLE_MAX_CHARS: usize = 30;

// =============================================================================
// Enums
// =============================================================================

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Text typed by the user.
    User,
    /// Reply produced by the resolver.
    Assistant,
}

// =============================================================================
// Messages and conversations
// =============================================================================

/// A single message in a conversation. Never edited once appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A titled, append-only thread of messages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create an empty conversation titled [`DEFAULT_TITLE`].
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a message.
    ///
    /// The first message of a conversation also replaces the title with
    /// [`title_from_content`] of its content.
    pub fn push(&mut self, role: Role, content: impl Into<String>) -> &Message {
        let message = Message::new(role, content);
        if self.messages.is_empty() {
            self.title = title_from_content(&message.content);
        }
        self.messages.push(message);
        // Just pushed, so the slice is non-empty.
        &self.messages[self.messages.len() - 1]
    }

    /// Sidebar entry for this conversation.
    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id,
            title: self.title.clone(),
            message_count: self.messages.len(),
        }
    }
}

/// Sidebar entry: id and title of a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: Uuid,
    pub title: String,
    pub message_count: usize,
}

/// Derive a conversation title from its first message.
///
/// Content longer than [`TITLE_MAX_CHARS`] characters is cut to that many
/// characters and suffixed with `"..."`; shorter content is used as is.
pub fn title_from_content(content: &str) -> String {
    match content.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_new_conversation_has_default_title() {
        let conv = Conversation::new(Uuid::new_v4());
        assert_eq!(conv.title, DEFAULT_TITLE);
        assert!(conv.messages.is_empty());
    }

    #[test]
    fn test_title_short_content_unchanged() {
        assert_eq!(title_from_content("Hello there"), "Hello there");
    }

    #[test]
    fn test_title_exactly_thirty_chars_unchanged() {
        let content = "a".repeat(30);
        assert_eq!(title_from_content(&content), content);
    }

    #[test]
    fn test_title_long_content_truncated_with_ellipsis() {
        let content = "a".repeat(31);
        assert_eq!(title_from_content(&content), format!("{}...", "a".repeat(30)));

        let title = title_from_content("Explain the theory of relativity in simple words");
        assert_eq!(title, "Explain the theory of relativi...");
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        // 31 Devanagari/Arabic characters are many more than 31 bytes.
        let content = "क".repeat(31);
        let title = title_from_content(&content);
        assert_eq!(title.chars().count(), 33);
        assert!(title.ends_with("..."));

        let content = "ت".repeat(30);
        assert_eq!(title_from_content(&content), content);
    }

    #[test]
    fn test_title_empty_content() {
        assert_eq!(title_from_content(""), "");
    }

    #[test]
    fn test_first_push_sets_title_later_pushes_do_not() {
        let mut conv = Conversation::new(Uuid::new_v4());
        conv.push(Role::User, "What is the capital of France?");
        assert_eq!(conv.title, "What is the capital of France?");

        conv.push(Role::Assistant, "Paris is the capital of France.");
        conv.push(Role::User, "And of Germany?");
        assert_eq!(conv.title, "What is the capital of France?");
        assert_eq!(conv.messages.len(), 3);
    }

    #[test]
    fn test_push_preserves_order_and_returns_message() {
        let mut conv = Conversation::new(Uuid::new_v4());
        let msg = conv.push(Role::User, "one").clone();
        assert_eq!(msg.content, "one");
        conv.push(Role::Assistant, "two");
        let contents: Vec<&str> = conv.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two"]);
        assert_eq!(conv.messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_summary_reflects_conversation() {
        let mut conv = Conversation::new(Uuid::new_v4());
        conv.push(Role::User, "hi");
        let summary = conv.summary();
        assert_eq!(summary.id, conv.id);
        assert_eq!(summary.title, "hi");
        assert_eq!(summary.message_count, 1);
    }
}
