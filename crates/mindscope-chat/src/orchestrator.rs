//! Chat orchestrator: owns the session and runs one submission end to end.
//!
//! A submission resolves a reply and then appends the user message and the
//! assistant message in one store-lock section, so an exchange is recorded
//! whole or not at all. Submissions take a separate turn lock and run
//! strictly one after another; the store lock is never held across the
//! model call, so reads and sidebar actions stay responsive meanwhile.

use tokio::sync::Mutex;
use uuid::Uuid;

use mindscope_core::types::{Conversation, ConversationSummary, Role};

use crate::error::ChatError;
use crate::resolver::ResponseResolver;
use crate::store::ConversationStore;
use crate::types::{ChatReply, SessionSnapshot};

/// Session-owning coordinator between the store and the resolver.
pub struct ChatOrchestrator {
    store: Mutex<ConversationStore>,
    /// Held for a whole submission.
    turn: Mutex<()>,
    resolver: ResponseResolver,
}

impl ChatOrchestrator {
    pub fn new(resolver: ResponseResolver) -> Self {
        Self {
            store: Mutex::new(ConversationStore::new()),
            turn: Mutex::new(()),
            resolver,
        }
    }

    pub fn model_name(&self) -> &str {
        self.resolver.model_name()
    }

    /// Handle one user submission against the current conversation.
    ///
    /// Creates a conversation first if none is current. The reply lands in
    /// the conversation that was current when the submission started; if
    /// that conversation is deleted while the reply is pending, nothing is
    /// recorded and `ConversationNotFound` is returned. Dropping the future
    /// before it completes leaves the conversation untouched.
    pub async fn handle_message(&self, message: &str) -> Result<ChatReply, ChatError> {
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let _turn = self.turn.lock().await;
        let id = self.store.lock().await.ensure_current();

        let resolution = self.resolver.resolve(message).await;
        let source = resolution.source();
        let reply = resolution.into_text();

        let title = {
            let mut store = self.store.lock().await;
            store.conversation(id)?;
            store.append_message(id, Role::User, message)?;
            store.append_message(id, Role::Assistant, reply.clone())?;
            store.conversation(id)?.title.clone()
        };

        tracing::info!(
            conversation_id = %id,
            source = ?source,
            prompt_chars = message.chars().count(),
            reply_chars = reply.chars().count(),
            "Message handled"
        );

        Ok(ChatReply {
            conversation_id: id,
            title,
            reply,
            source,
        })
    }

    /// State for drawing the chat page, creating a conversation if none is
    /// current.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let mut store = self.store.lock().await;
        let current_id = store.ensure_current();
        let messages = store
            .current()
            .map(|conv| conv.messages.clone())
            .unwrap_or_default();
        SessionSnapshot {
            current_id,
            conversations: store.list_conversations(),
            messages,
        }
    }

    pub async fn create_conversation(&self) -> ConversationSummary {
        let summary = self.store.lock().await.create_conversation();
        tracing::info!(conversation_id = %summary.id, "New chat started");
        summary
    }

    /// Make `id` current and return it.
    pub async fn select_conversation(&self, id: Uuid) -> Result<Conversation, ChatError> {
        let mut store = self.store.lock().await;
        store.select_conversation(id)?;
        Ok(store.conversation(id)?.clone())
    }

    /// Delete `id` and return the current id afterwards.
    pub async fn delete_conversation(&self, id: Uuid) -> Result<Option<Uuid>, ChatError> {
        let mut store = self.store.lock().await;
        store.delete_conversation(id)?;
        Ok(store.current_id())
    }

    /// Sidebar entries and the current id.
    pub async fn list_conversations(&self) -> (Vec<ConversationSummary>, Option<Uuid>) {
        let store = self.store.lock().await;
        (store.list_conversations(), store.current_id())
    }

    pub async fn conversation(&self, id: Uuid) -> Result<Conversation, ChatError> {
        let store = self.store.lock().await;
        store.conversation(id).cloned()
    }

    pub async fn conversation_count(&self) -> usize {
        self.store.lock().await.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
