//! Error types for the conversational core.

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("conversation not found: {0}")]
    ConversationNotFound(uuid::Uuid),
    #[error("generation error: {0}")]
    Generation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::EmptyMessage;
        assert_eq!(err.to_string(), "message cannot be empty");

        let id = Uuid::new_v4();
        let err = ChatError::ConversationNotFound(id);
        assert_eq!(err.to_string(), format!("conversation not found: {}", id));

        let err = ChatError::Generation("quota exceeded".to_string());
        assert_eq!(err.to_string(), "generation error: quota exceeded");
    }

    #[test]
    fn test_conversation_not_found_preserves_uuid() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let err = ChatError::ConversationNotFound(id);
        assert_eq!(
            err.to_string(),
            "conversation not found: 550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_generation_error_unicode_message() {
        let err = ChatError::Generation("model error: \u{1f4a5}".to_string());
        assert!(err.to_string().contains("\u{1f4a5}"));
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", ChatError::EmptyMessage);
        assert!(dbg.contains("EmptyMessage"));

        let dbg = format!("{:?}", ChatError::ConversationNotFound(Uuid::nil()));
        assert!(dbg.contains("ConversationNotFound"));
    }
}
