//! Conversational core for MindScope.
//!
//! Provides the session-scoped conversation store, the identity intercept,
//! the generative model client, and the orchestrator that runs one user
//! submission end to end.

pub mod error;
pub mod gemini;
pub mod identity;
pub mod model;
pub mod orchestrator;
pub mod resolver;
pub mod store;
pub mod types;

pub use error::ChatError;
pub use gemini::GeminiClient;
pub use identity::{IdentityIntercept, Language};
pub use model::{GenerationConfig, GenerativeModel};
pub use orchestrator::ChatOrchestrator;
pub use resolver::{Resolution, ResponseResolver, APOLOGY_MESSAGE};
pub use store::ConversationStore;
pub use types::{ChatReply, ChatRequest, ReplySource, SessionSnapshot};
