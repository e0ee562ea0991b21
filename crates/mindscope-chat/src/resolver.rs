//! Response resolution: identity intercept, model call, or apology.

use std::sync::Arc;

use crate::identity::IdentityIntercept;
use crate::model::{GenerationConfig, GenerativeModel};
use crate::types::ReplySource;

/// Reply shown when the model call fails for any reason.
pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I encountered an error. Please try asking your question again.";

/// Outcome of resolving one prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Canned identity reply; the model was not called.
    Identity(&'static str),
    /// Text returned by the model, verbatim.
    Generated(String),
    /// The model call failed. Carries the error description for logging.
    Fallback { error: String },
}

impl Resolution {
    /// Text to show the user.
    pub fn text(&self) -> &str {
        match self {
            Resolution::Identity(text) => text,
            Resolution::Generated(text) => text,
            Resolution::Fallback { .. } => APOLOGY_MESSAGE,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Resolution::Generated(text) => text,
            other => other.text().to_string(),
        }
    }

    pub fn source(&self) -> ReplySource {
        match self {
            Resolution::Identity(_) => ReplySource::Identity,
            Resolution::Generated(_) => ReplySource::Model,
            Resolution::Fallback { .. } => ReplySource::Fallback,
        }
    }
}

/// Turns a user prompt into a reply.
pub struct ResponseResolver {
    intercept: IdentityIntercept,
    model: Arc<dyn GenerativeModel>,
    generation: GenerationConfig,
}

impl ResponseResolver {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            intercept: IdentityIntercept::new(),
            model,
            generation: GenerationConfig::default(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Resolve `prompt`.
    ///
    /// Identity questions are answered locally. Anything else goes to the
    /// model once; a failed call becomes [`Resolution::Fallback`].
    pub async fn resolve(&self, prompt: &str) -> Resolution {
        if let Some(reply) = self.intercept.check(prompt) {
            return Resolution::Identity(reply);
        }

        match self.model.generate(prompt, &self.generation).await {
            Ok(text) => Resolution::Generated(text),
            Err(e) => {
                tracing::warn!(model = self.model.name(), error = %e, "Model call failed");
                Resolution::Fallback {
                    error: e.to_string(),
                }
            }
        }
    }
}
