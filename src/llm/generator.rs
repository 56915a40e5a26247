//! Core `ReplyGenerator` trait and `GeminiGenerator` implementation.
//!
//! `GeminiGenerator` calls the generative-language
//! `/v1beta/models/{model}:generateContent` endpoint with the flat prompt
//! built by [`PromptBuilder`](crate::tutor::PromptBuilder).  All connection
//! details come from [`LlmConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LlmConfig;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur while generating a reply.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key in the config file or the environment.
    #[error("no API key configured (set llm.api_key or GEMINI_API_KEY)")]
    MissingApiKey,

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("model request timed out")]
    Timeout,

    /// The API answered with a non-success status.
    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse model response: {0}")]
    Parse(String),

    /// The model returned a response with no usable text content.
    #[error("model returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// ReplyGenerator trait
// ---------------------------------------------------------------------------

/// Async trait for model-backed reply generation.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn ReplyGenerator>`).
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generate a reply for the fully-built `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Pull the reply text out of a `generateContent` response body.
///
/// Text parts of the first candidate are concatenated and trimmed.
fn extract_reply(body: &str) -> Result<String, LlmError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Parse(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(LlmError::Api {
            status: 200,
            message: error.message,
        });
    }

    let reply: String = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .ok_or(LlmError::EmptyResponse)?;

    let reply = reply.trim();
    if reply.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(reply.to_string())
}

// ---------------------------------------------------------------------------
// GeminiGenerator
// ---------------------------------------------------------------------------

/// Calls the generative-language `generateContent` endpoint.
///
/// The API key is resolved once at construction (config first, then the
/// `GEMINI_API_KEY` environment variable).  Without a key every call fails
/// with [`LlmError::MissingApiKey`].
pub struct GeminiGenerator {
    client: reqwest::Client,
    config: LlmConfig,
    api_key: Option<String>,
}

impl GeminiGenerator {
    /// Build a `GeminiGenerator` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.
    pub fn from_config(config: &LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
            api_key: config.resolved_api_key(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl ReplyGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        };

        log::debug!(
            "generateContent model={} prompt_len={}",
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GenerateResponse>(&text)
                .ok()
                .and_then(|r| r.error)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        extract_reply(&text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
