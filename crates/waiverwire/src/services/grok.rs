//! Grok Live Search client that produces the waiver wire digest.
//!
//! Calls xAI's OpenAI-compatible chat completions endpoint with
//! `search_parameters`, so the model grounds its answer in X, web and news
//! results and returns the source URLs as `citations`.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SearchConfig;
use crate::domain::{Digest, FetchError, SearchMode, SearchOptions, SearchProfile, SourceKind};
use crate::ports::DigestSource;

/// Client that asks Grok for one digest per call.
#[derive(Clone)]
pub struct GrokClient {
    client: Client,
    config: SearchConfig,
    profile: SearchProfile,
}

impl GrokClient {
    /// Creates a new client for the given endpoint and profile.
    pub fn new(config: SearchConfig, profile: SearchProfile) -> Self {
        Self {
            client: Client::new(),
            config,
            profile,
        }
    }

    /// Request payload for the given day.
    pub fn build_request(&self, today: NaiveDate) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: self.profile.render_prompt(today),
            }],
            model: self.profile.model.clone(),
            stream: false,
            temperature: self.profile.temperature,
            search_parameters: SearchParameters::from_options(&self.profile.search),
        }
    }

    async fn perform_request(&self) -> Result<Digest, FetchError> {
        let request = self.build_request(Local::now().date_naive());

        tracing::info!(
            "🔍 Asking {} for waiver wire picks (live search: {})",
            request.model,
            request.search_parameters.is_some()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        let status = response.status();
        tracing::info!("📡 API response status: {}", status.as_u16());

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        digest_from_response(status, &body)
    }
}

#[async_trait]
impl DigestSource for GrokClient {
    async fn fetch(&self) -> Result<Digest, FetchError> {
        self.perform_request().await
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub stream: bool,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_parameters: Option<SearchParameters>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchParameters {
    pub mode: SearchMode,
    pub sources: Vec<SearchSource>,
    pub return_citations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_search_results: Option<u32>,
}

impl SearchParameters {
    fn from_options(options: &SearchOptions) -> Option<Self> {
        if !options.enabled {
            return None;
        }

        Some(Self {
            mode: options.mode,
            sources: options
                .sources
                .iter()
                .map(|kind| SearchSource { kind: *kind })
                .collect(),
            return_citations: options.return_citations,
            max_search_results: options.max_search_results,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchSource {
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    citations: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// ============================================
// Helper Functions
// ============================================

/// Turn a raw HTTP response into a digest.
///
/// Only 200 is accepted. A body carrying a top-level `error` key is a failure
/// even when the status is 200.
pub fn digest_from_response(status: StatusCode, body: &str) -> Result<Digest, FetchError> {
    if status != StatusCode::OK {
        tracing::warn!("API response: {}", body);
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let payload: Value =
        serde_json::from_str(body).map_err(|err| FetchError::Parse(err.to_string()))?;

    if let Some(error) = payload.get("error") {
        return Err(FetchError::Api(describe_api_error(error)));
    }

    let envelope: ChatCompletionResponse =
        serde_json::from_value(payload).map_err(|err| FetchError::Parse(err.to_string()))?;

    let content = envelope
        .choices
        .into_iter()
        .next()
        .ok_or(FetchError::EmptyChoices)?
        .message
        .content
        .ok_or(FetchError::EmptyContent)?;

    let citations = envelope.citations.unwrap_or_default();
    if !citations.is_empty() {
        tracing::info!("📚 {} citations returned", citations.len());
    }

    Digest::compose(&content, &citations)
}

fn describe_api_error(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Object(fields) => fields
            .get("message")
            .and_then(|msg| msg.as_str())
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| error.to_string()),
        other => other.to_string(),
    }
}
