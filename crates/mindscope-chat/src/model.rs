//! Generative model abstraction.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ChatError;

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

/// A hosted text-in, text-out language model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Model identifier, for logs and the health endpoint.
    fn name(&self) -> &str;

    /// Generate a reply to `prompt`.
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String, ChatError>;
}
