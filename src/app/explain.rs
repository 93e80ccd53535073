//! Completion request assembly and the single HTTP call behind Explain.
//!
//! One outbound request per user action, no retries, no streaming. The
//! credential is resolved from the environment once at startup into an
//! [`ExplainConfig`] and passed in explicitly, so this module never touches
//! process globals at request time.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Instant;

use super::error::AppError;
use super::levels::ExplanationLevel;

/// OpenAI-compatible chat-completion endpoint used by default.
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model requested by default.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

const SYSTEM_PREAMBLE: &str =
    "You are a helpful AI assistant that explains complex topics in simple terms.";
const FALLBACK_EXPLANATION: &str = "No explanation was generated.";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Where and how to reach the completion endpoint.
#[derive(Debug, Clone)]
pub struct ExplainConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
}

impl ExplainConfig {
    /// Resolve the credential from `EXPLAINPAD_API_KEY`, falling back to
    /// `GROQ_API_KEY`, with the default endpoint and model.
    pub fn from_env() -> Self {
        let api_key = env::var("EXPLAINPAD_API_KEY")
            .ok()
            .or_else(|| env::var("GROQ_API_KEY").ok())
            .filter(|key| !key.trim().is_empty());
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

/// Request one explanation from the completion endpoint.
///
/// Preconditions are checked before anything goes on the wire: the text must
/// be non-empty after trimming and a credential must be configured. Failures
/// map onto the [`AppError`] taxonomy; no retry is attempted.
pub fn request_explanation(
    config: &ExplainConfig,
    text: &str,
    level: ExplanationLevel,
) -> Result<String, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyInput);
    }
    let Some(api_key) = config.api_key.as_deref().filter(|key| !key.trim().is_empty()) else {
        return Err(AppError::MissingApiKey);
    };

    let request = build_request(config, text, level);
    let started = Instant::now();

    let response = minreq::post(config.endpoint.as_str())
        .with_timeout(REQUEST_TIMEOUT_SECS)
        .with_header("Authorization", format!("Bearer {api_key}"))
        .with_json(&request)
        .map_err(|err| AppError::Http(err.to_string()))?
        .send()
        .map_err(|err| AppError::Http(err.to_string()))?;

    let status = response.status_code;
    tracing::info!(
        status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        input_bytes = text.len(),
        level = level.label(),
        "explanation request finished"
    );

    if !(200..300).contains(&status) {
        let body = response.as_str().unwrap_or_default();
        return Err(AppError::Upstream {
            status,
            message: upstream_message(status, body),
        });
    }

    let parsed: ChatResponse = response
        .json()
        .map_err(|err| AppError::Http(err.to_string()))?;
    Ok(extract_content(parsed))
}

/// Build the request payload for a given text and level.
fn build_request(config: &ExplainConfig, text: &str, level: ExplanationLevel) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: format!("{SYSTEM_PREAMBLE} {}", level.instruction()),
            },
            ChatMessage {
                role: "user".to_string(),
                content: text.to_string(),
            },
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

/// First choice's content, or the fixed fallback when the response carries
/// no usable text.
fn extract_content(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| FALLBACK_EXPLANATION.to_string())
}

/// Error message from an `{"error":{"message":...}}` body, or a generic
/// fallback naming the status.
fn upstream_message(status: i32, body: &str) -> String {
    serde_json::from_str::<UpstreamErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .map(|detail| detail.message)
        .unwrap_or_else(|| format!("Failed to get explanation (status {status})"))
}
