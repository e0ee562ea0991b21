//! Gemini REST client.
//!
//! Calls the `generateContent` endpoint directly over HTTPS with a single
//! user turn and the fixed generation config.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use mindscope_core::config::ModelConfig;

use crate::error::ChatError;
use crate::model::{GenerationConfig, GenerativeModel};

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client for `model` against the public Gemini endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let defaults = ModelConfig::default();
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: defaults.base_url,
        }
    }

    /// Create a client from the `[model]` config section.
    pub fn from_config(api_key: impl Into<String>, config: &ModelConfig) -> Self {
        Self::new(api_key, config.name.clone()).with_base_url(config.base_url.clone())
    }

    /// Overrides the base URL of the models collection.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String, ChatError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: config,
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Generation(format!("Gemini API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Generation(format!("Failed to parse Gemini response: {}", e)))?;

        extract_text(parsed)
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: &'a GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Join the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, ChatError> {
    let block_reason = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason);

    let parts: Vec<String> = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if parts.is_empty() {
        return Err(ChatError::Generation(match block_reason {
            Some(reason) => format!("Gemini blocked the prompt: {}", reason),
            None => "Gemini API returned no text in the response candidates".to_string(),
        }));
    }

    Ok(parts.concat())
}

fn map_http_error(status: StatusCode, body: &str) -> ChatError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{}: {}", status_text, msg)
            }
        })
        .unwrap_or_else(|_| body.to_string());

    ChatError::Generation(format!("HTTP {}: {}", status.as_u16(), message))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::HeaderMap;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    #[derive(Clone, Default)]
    struct Captured {
        call: Arc<Mutex<Option<String>>>,
        api_key: Arc<Mutex<Option<String>>>,
        body: Arc<Mutex<Option<Value>>>,
    }

    /// Serve `router` on an ephemeral local port and return its models URL.
    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1beta/models", addr)
    }

    fn fixed_response(status: u16, body: Value) -> Router {
        Router::new().route(
            "/v1beta/models/{call}",
            post(move || {
                let body = body.clone();
                async move { (StatusCode::from_u16(status).unwrap(), Json(body)) }
            }),
        )
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_fixed_config() {
        let captured = Captured::default();
        let router = Router::new()
            .route(
                "/v1beta/models/{call}",
                post(
                    |State(captured): State<Captured>,
                     Path(call): Path<String>,
                     headers: HeaderMap,
                     Json(body): Json<Value>| async move {
                        *captured.call.lock().unwrap() = Some(call);
                        *captured.api_key.lock().unwrap() = headers
                            .get("x-goog-api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        *captured.body.lock().unwrap() = Some(body);
                        Json(json!({
                            "candidates": [{
                                "content": {"role": "model", "parts": [{"text": "Paris."}]}
                            }]
                        }))
                    },
                ),
            )
            .with_state(captured.clone());
        let base = spawn_server(router).await;

        let client = GeminiClient::new("test-key", "gemini-pro").with_base_url(base);
        let reply = client
            .generate("What is the capital of France?", &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(reply, "Paris.");

        assert_eq!(
            captured.call.lock().unwrap().as_deref(),
            Some("gemini-pro:generateContent")
        );
        assert_eq!(captured.api_key.lock().unwrap().as_deref(), Some("test-key"));

        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "What is the capital of France?"
        );
        let generation = &body["generationConfig"];
        assert_eq!(generation["topK"], 40);
        assert_eq!(generation["maxOutputTokens"], 2048);
        assert!((generation["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((generation["topP"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_generate_joins_text_parts_of_first_candidate() {
        let base = spawn_server(fixed_response(
            200,
            json!({
                "candidates": [
                    {"content": {"parts": [{"text": "Hello, "}, {"text": "world"}]}},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ]
            }),
        ))
        .await;
        let client = GeminiClient::new("k", "gemini-pro").with_base_url(base);
        let reply = client.generate("hi", &GenerationConfig::default()).await.unwrap();
        assert_eq!(reply, "Hello, world");
    }

    #[tokio::test]
    async fn test_generate_http_error_is_generation_error() {
        let base = spawn_server(fixed_response(
            429,
            json!({"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}),
        ))
        .await;
        let client = GeminiClient::new("k", "gemini-pro").with_base_url(base);
        let err = client
            .generate("hi", &GenerationConfig::default())
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, ChatError::Generation(_)));
        assert!(msg.contains("429"));
        assert!(msg.contains("RESOURCE_EXHAUSTED: Quota exceeded"));
    }

    #[tokio::test]
    async fn test_generate_blocked_prompt_is_error() {
        let base = spawn_server(fixed_response(
            200,
            json!({"promptFeedback": {"blockReason": "SAFETY"}}),
        ))
        .await;
        let client = GeminiClient::new("k", "gemini-pro").with_base_url(base);
        let err = client
            .generate("hi", &GenerationConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_generate_empty_candidates_is_error() {
        let base = spawn_server(fixed_response(200, json!({"candidates": []}))).await;
        let client = GeminiClient::new("k", "gemini-pro").with_base_url(base);
        let err = client
            .generate("hi", &GenerationConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no text"));
    }

    #[tokio::test]
    async fn test_generate_connection_refused_is_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            GeminiClient::new("k", "gemini-pro").with_base_url(format!("http://{}/models", addr));
        let err = client
            .generate("hi", &GenerationConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("request failed"));
    }

    #[test]
    fn test_from_config_and_trailing_slash() {
        let config = ModelConfig {
            name: "gemini-1.5-flash".to_string(),
            base_url: "http://localhost:9000/models/".to_string(),
        };
        let client = GeminiClient::from_config("k", &config);
        assert_eq!(client.name(), "gemini-1.5-flash");
        assert_eq!(client.base_url(), "http://localhost:9000/models");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_map_http_error_plain_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "generation error: HTTP 502: upstream down");
    }
}
