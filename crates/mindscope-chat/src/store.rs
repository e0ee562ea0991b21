//! Session-scoped conversation store.
//!
//! Holds every conversation of the running session, keyed by id, together
//! with the "current conversation" pointer. Nothing is persisted.

use std::collections::HashMap;

use uuid::Uuid;

use mindscope_core::types::{Conversation, ConversationSummary, Message, Role};

use crate::error::ChatError;

// =============================================================================
// ConversationStore
// =============================================================================

/// Conversations of one session plus the current-conversation pointer.
///
/// Invariant: `current`, when set, is a key of `conversations`.
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: HashMap<Uuid, Conversation>,
    /// Ids in creation order.
    order: Vec<Uuid>,
    current: Option<Uuid>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty conversation titled "New Chat" and make it current.
    pub fn create_conversation(&mut self) -> ConversationSummary {
        let mut id = Uuid::new_v4();
        while self.conversations.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let conversation = Conversation::new(id);
        let summary = conversation.summary();
        self.conversations.insert(id, conversation);
        self.order.push(id);
        self.current = Some(id);
        tracing::debug!(conversation_id = %id, "Conversation created");
        summary
    }

    /// Make `id` the current conversation.
    pub fn select_conversation(&mut self, id: Uuid) -> Result<(), ChatError> {
        if !self.conversations.contains_key(&id) {
            return Err(ChatError::ConversationNotFound(id));
        }
        self.current = Some(id);
        Ok(())
    }

    /// Remove a conversation, clearing the current pointer if it named it.
    ///
    /// Returns the removed conversation.
    pub fn delete_conversation(&mut self, id: Uuid) -> Result<Conversation, ChatError> {
        let removed = self
            .conversations
            .remove(&id)
            .ok_or(ChatError::ConversationNotFound(id))?;
        self.order.retain(|other| *other != id);
        if self.current == Some(id) {
            self.current = None;
        }
        tracing::debug!(conversation_id = %id, "Conversation deleted");
        Ok(removed)
    }

    /// Append a message to conversation `id`.
    ///
    /// The first message of a conversation also sets its title.
    pub fn append_message(
        &mut self,
        id: Uuid,
        role: Role,
        content: impl Into<String>,
    ) -> Result<&Message, ChatError> {
        let conversation = self
            .conversations
            .get_mut(&id)
            .ok_or(ChatError::ConversationNotFound(id))?;
        Ok(conversation.push(role, content))
    }

    /// Sidebar entries in creation order.
    pub fn list_conversations(&self) -> Vec<ConversationSummary> {
        self.order
            .iter()
            .filter_map(|id| self.conversations.get(id))
            .map(Conversation::summary)
            .collect()
    }

    /// Return the current conversation id, creating one if none is set.
    pub fn ensure_current(&mut self) -> Uuid {
        match self.current {
            Some(id) => id,
            None => self.create_conversation().id,
        }
    }

    pub fn current_id(&self) -> Option<Uuid> {
        self.current
    }

    pub fn current(&self) -> Option<&Conversation> {
        self.current.and_then(|id| self.conversations.get(&id))
    }

    pub fn conversation(&self, id: Uuid) -> Result<&Conversation, ChatError> {
        self.conversations
            .get(&id)
            .ok_or(ChatError::ConversationNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
