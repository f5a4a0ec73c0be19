//! Prompt generation — orchestrates one request end to end.
//!
//! Flow: build instruction → single completion call → parse numbered list →
//! truncate to the requested count. One batched call covers the whole
//! request; fewer usable lines than requested is not an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::options::{
    Category, PromptLength, Tone, MAX_PROMPT_COUNT, MIN_PROMPT_COUNT,
};
use crate::generation::parser::clean_prompt_lines;
use crate::generation::prompts::{build_system_prompt, build_user_prompt};
use crate::llm_client::{CompletionBackend, CompletionError};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One prompt-generation request, immutable once captured.
///
/// `topic` must be non-empty after trimming and `count` within bounds;
/// `validate` enforces both and the handler short-circuits before any
/// completion call is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub topic: String,
    #[serde(default)]
    pub length: PromptLength,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub category: Category,
    pub count: u8,
}

impl PromptRequest {
    /// Caller-side validation. Failures here are user errors, not
    /// generation errors, and must never reach the completion service.
    pub fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("topic cannot be empty".to_string());
        }
        if !(MIN_PROMPT_COUNT..=MAX_PROMPT_COUNT).contains(&self.count) {
            return Err(format!(
                "count must be between {MIN_PROMPT_COUNT} and {MAX_PROMPT_COUNT}"
            ));
        }
        Ok(())
    }
}

/// Terminal failure of one generation request. Variants mirror what the
/// completion service signaled so the caller can surface distinct messages.
/// Nothing is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion service rejected the API credential")]
    AuthenticationFailure,

    #[error("completion service signaled a rate limit")]
    RateLimited,

    #[error("completion service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("completion returned no usable prompt lines")]
    EmptyCompletion,

    #[error("prompt generation failed: {0}")]
    Unknown(String),
}

impl From<CompletionError> for GenerationError {
    fn from(error: CompletionError) -> Self {
        match error {
            CompletionError::AuthenticationFailure => GenerationError::AuthenticationFailure,
            CompletionError::RateLimited => GenerationError::RateLimited,
            CompletionError::ServiceUnavailable(msg) => GenerationError::ServiceUnavailable(msg),
            CompletionError::EmptyContent => GenerationError::EmptyCompletion,
            CompletionError::Unknown(msg) => GenerationError::Unknown(msg),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates 1..=count writing prompts for a validated request.
///
/// Returns fewer than `count` prompts when the completion contains fewer
/// usable lines — best effort, not an error. Extra lines beyond `count`
/// are dropped.
pub async fn generate(
    backend: &dyn CompletionBackend,
    request: &PromptRequest,
) -> Result<Vec<String>, GenerationError> {
    let system = build_system_prompt(request);
    let user = build_user_prompt(request);

    let completion = backend.complete(&system, &user).await?;

    let mut prompts = clean_prompt_lines(&completion);

    if prompts.is_empty() {
        return Err(GenerationError::EmptyCompletion);
    }

    if prompts.len() < request.count as usize {
        warn!(
            "Completion yielded {} of {} requested prompts",
            prompts.len(),
            request.count
        );
    }
    prompts.truncate(request.count as usize);

    info!(
        "Generated {} prompt(s) for topic '{}'",
        prompts.len(),
        request.topic.trim()
    );

    Ok(prompts)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
