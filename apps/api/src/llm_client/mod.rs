/// LLM Client — the single point of entry for all completion calls in Muse.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All completion-service interactions MUST go through this module.
///
/// Model: gpt-4 (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all completion calls in Muse.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4";
const MAX_TOKENS: u32 = 1024;

/// Typed failure taxonomy for the completion service.
///
/// Each variant is distinguishable so the caller can surface a distinct
/// message. No variant is retried — every failure is terminal for the
/// current request.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion service rejected the API credential")]
    AuthenticationFailure,

    #[error("completion service signaled a rate limit")]
    RateLimited,

    #[error("completion service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("completion service returned empty content")]
    EmptyContent,

    #[error("unexpected completion service failure: {0}")]
    Unknown(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The seam between the generation pipeline and the completion service.
/// `LlmClient` is the production backend; tests substitute their own.
///
/// Carried in `AppState` as `Arc<dyn CompletionBackend>`.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Submits one system + user message pair and returns the completion text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

/// The single completion client used by all handlers in Muse.
/// Wraps the OpenAI Chat Completions API. One unretried call per request.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let request_body = ChatRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status().as_u16();

        if let Some(error) = classify_status(status) {
            let body = response.text().await.unwrap_or_default();
            // Prefer the service's own error message when the body parses
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(match error {
                CompletionError::ServiceUnavailable(_) => {
                    CompletionError::ServiceUnavailable(format!("status {status}: {message}"))
                }
                CompletionError::Unknown(_) => {
                    CompletionError::Unknown(format!("status {status}: {message}"))
                }
                other => other,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Unknown(format!("malformed response body: {e}")))?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "Completion call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(CompletionError::EmptyContent);
        }

        Ok(text)
    }
}

/// Maps an HTTP status from the completion service to the error taxonomy.
/// Returns `None` for success statuses.
fn classify_status(status: u16) -> Option<CompletionError> {
    match status {
        200..=299 => None,
        401 | 403 => Some(CompletionError::AuthenticationFailure),
        429 => Some(CompletionError::RateLimited),
        500..=599 => Some(CompletionError::ServiceUnavailable(String::new())),
        other => Some(CompletionError::Unknown(format!("status {other}"))),
    }
}

/// Maps a transport-level failure (connect refused, timeout) to the taxonomy.
fn classify_transport_error(error: reqwest::Error) -> CompletionError {
    if error.is_timeout() || error.is_connect() {
        CompletionError::ServiceUnavailable(error.to_string())
    } else {
        CompletionError::Unknown(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status_success_is_none() {
        assert!(classify_status(200).is_none());
        assert!(classify_status(201).is_none());
    }

    #[test]
    fn test_classify_status_401_is_authentication_failure() {
        assert!(matches!(
            classify_status(401),
            Some(CompletionError::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_classify_status_403_is_authentication_failure() {
        assert!(matches!(
            classify_status(403),
            Some(CompletionError::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_classify_status_429_is_rate_limited() {
        assert!(matches!(
            classify_status(429),
            Some(CompletionError::RateLimited)
        ));
    }

    #[test]
    fn test_classify_status_5xx_is_service_unavailable() {
        assert!(matches!(
            classify_status(500),
            Some(CompletionError::ServiceUnavailable(_))
        ));
        assert!(matches!(
            classify_status(503),
            Some(CompletionError::ServiceUnavailable(_))
        ));
    }

    #[test]
    fn test_classify_status_other_is_unknown() {
        assert!(matches!(
            classify_status(418),
            Some(CompletionError::Unknown(_))
        ));
    }

    #[test]
    fn test_chat_request_serializes_system_then_user() {
        let request = ChatRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are an assistant.",
                },
                ChatMessage {
                    role: "user",
                    content: "Hello",
                },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_chat_response_extracts_first_choice_content() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "A prompt."}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap();
        assert_eq!(text, "A prompt.");
    }
}
