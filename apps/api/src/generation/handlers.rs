//! Axum route handlers for the Generation API.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::export::{export_filename, render_export};
use crate::generation::generator::{generate, PromptRequest};
use crate::generation::topics::pick_surprise_topic;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub topic: String,
    pub prompts: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub topic: String,
    pub prompts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SurpriseResponse {
    pub topic: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/prompts
///
/// Generates 1..=5 writing prompts for the requested topic and options.
/// Topic and count are validated here so an invalid request never reaches
/// the completion service.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    request.validate().map_err(AppError::Validation)?;

    let prompts = generate(state.llm.as_ref(), &request).await?;

    Ok(Json(GenerateResponse {
        topic: request.topic.trim().to_string(),
        prompts,
    }))
}

/// POST /api/v1/prompts/export
///
/// Renders an already-generated batch as a plain-text download:
/// numbered prompts separated by blank lines, filename slugged from the
/// topic. No completion call is made.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    if request.prompts.is_empty() {
        return Err(AppError::Validation(
            "prompts cannot be empty".to_string(),
        ));
    }

    let body = render_export(&request.topic, &request.prompts);
    let filename = export_filename(&request.topic);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid filename header: {e}")))?,
    );

    Ok((headers, body))
}

/// GET /api/v1/topics/surprise
///
/// Returns a random topic from the curated pool for callers with no topic
/// in mind.
pub async fn handle_surprise() -> Json<SurpriseResponse> {
    Json(SurpriseResponse {
        topic: pick_surprise_topic().to_string(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::{CompletionBackend, CompletionError};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Backend that fails the test if any completion call is attempted.
    struct UnreachableBackend;

    #[async_trait]
    impl CompletionBackend for UnreachableBackend {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
            panic!("completion backend must not be called for invalid requests");
        }
    }

    /// Backend returning a fixed numbered list.
    struct CannedBackend;

    #[async_trait]
    impl CompletionBackend for CannedBackend {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
            Ok("1. Prompt A\n2. Prompt B\n3. Prompt C".to_string())
        }
    }

    fn state_with(backend: Arc<dyn CompletionBackend>) -> AppState {
        AppState {
            llm: backend,
            config: Config {
                openai_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    fn request_json(topic: &str, count: u8) -> Json<PromptRequest> {
        Json(PromptRequest {
            topic: topic.to_string(),
            length: Default::default(),
            tone: Default::default(),
            category: Default::default(),
            count,
        })
    }

    #[tokio::test]
    async fn test_empty_topic_never_reaches_the_backend() {
        let state = state_with(Arc::new(UnreachableBackend));
        let result = handle_generate(State(state), request_json("   ", 3)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_out_of_bounds_count_never_reaches_the_backend() {
        let state = state_with(Arc::new(UnreachableBackend));
        let result = handle_generate(State(state), request_json("a lighthouse keeper", 6)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_returns_parsed_prompts_and_trimmed_topic() {
        let state = state_with(Arc::new(CannedBackend));
        let Json(response) = handle_generate(State(state), request_json(" a lighthouse keeper ", 3))
            .await
            .unwrap();
        assert_eq!(response.topic, "a lighthouse keeper");
        assert_eq!(response.prompts, vec!["Prompt A", "Prompt B", "Prompt C"]);
    }

    #[tokio::test]
    async fn test_export_rejects_empty_prompt_list() {
        let result = handle_export(Json(ExportRequest {
            topic: "a lighthouse keeper".to_string(),
            prompts: vec![],
        }))
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_export_sets_attachment_headers() {
        let response = handle_export(Json(ExportRequest {
            topic: "a lighthouse keeper".to_string(),
            prompts: vec!["Prompt A".to_string()],
        }))
        .await
        .unwrap()
        .into_response();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        let disposition = headers
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("writing-prompts-a-lighthouse-keeper.txt"));
    }

    #[tokio::test]
    async fn test_surprise_returns_a_non_empty_topic() {
        let Json(response) = handle_surprise().await;
        assert!(!response.topic.trim().is_empty());
    }
}
