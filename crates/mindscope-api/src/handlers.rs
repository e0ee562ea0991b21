//! Route handler functions for all API endpoints.
//!
//! Handlers translate HTTP requests into calls on the shared
//! [`ChatOrchestrator`](mindscope_chat::ChatOrchestrator) and return JSON.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindscope_chat::{ChatReply, ChatRequest, SessionSnapshot};
use mindscope_core::types::{Conversation, ConversationSummary};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub conversation_count: usize,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationListResponse {
    pub current_id: Option<Uuid>,
    pub conversations: Vec<ConversationSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: Uuid,
    /// Current conversation after the delete; `None` when the deleted one
    /// was current.
    pub current_id: Option<Uuid>,
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::BadRequest(format!("Invalid conversation id '{}'", raw)))
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        conversation_count: state.orchestrator.conversation_count().await,
        model: state.orchestrator.model_name().to_string(),
    })
}

/// GET / and GET /ui - serve the self-contained chat page.
pub async fn ui() -> impl IntoResponse {
    Html(mindscope_ui::chat::CHAT_HTML)
}

/// GET /api/session - everything the page needs on load.
pub async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.orchestrator.snapshot().await)
}

/// GET /api/conversations - sidebar entries in creation order.
pub async fn list_conversations(State(state): State<AppState>) -> Json<ConversationListResponse> {
    let (conversations, current_id) = state.orchestrator.list_conversations().await;
    Json(ConversationListResponse {
        current_id,
        conversations,
    })
}

/// POST /api/conversations - start a new chat and make it current.
pub async fn create_conversation(State(state): State<AppState>) -> Json<ConversationSummary> {
    Json(state.orchestrator.create_conversation().await)
}

/// GET /api/conversations/{id} - full conversation.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Conversation>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.orchestrator.conversation(id).await?))
}

/// POST /api/conversations/{id}/select - make a conversation current.
pub async fn select_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Conversation>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.orchestrator.select_conversation(id).await?))
}

/// DELETE /api/conversations/{id} - remove a conversation.
pub async fn delete_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)?;
    let current_id = state.orchestrator.delete_conversation(id).await?;
    tracing::info!(conversation_id = %id, "Conversation deleted");
    Ok(Json(DeleteResponse {
        deleted: id,
        current_id,
    }))
}

/// POST /api/chat - submit a message to the current conversation.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let reply = state.orchestrator.handle_message(&body.message).await?;
    Ok(Json(reply))
}
