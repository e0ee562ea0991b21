//! Request and response types of the chat engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindscope_core::types::{ConversationSummary, Message};

/// Which resolver path produced a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Canned identity answer.
    Identity,
    /// Generated by the language model.
    Model,
    /// The model call failed and the apology was returned.
    Fallback,
}

/// A user submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Result of one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Conversation the exchange was appended to.
    pub conversation_id: Uuid,
    /// Conversation title after the exchange.
    pub title: String,
    pub reply: String,
    pub source: ReplySource,
}

/// What the chat page needs to draw itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub current_id: Uuid,
    pub conversations: Vec<ConversationSummary>,
    pub messages: Vec<Message>,
}
