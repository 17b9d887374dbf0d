//! Anthropic (message style) backend implementation.
//!
//! The message API differs from chat completions in two ways that matter
//! here: system instructions travel as a distinct top-level `system` field
//! (empty string when absent), and there is no native JSON-object response
//! mode — structured output relies on the prompt-level fallback in
//! [`crate::structured`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use mentor_core::{defaults, Error, GenerationRequest, LlmBackend, Result};

use crate::config::LlmConfig;

/// Anthropic generation backend.
pub struct AnthropicBackend {
    client: Client,
    config: LlmConfig,
}

impl AnthropicBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: LlmConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing Anthropic backend: url={}, model={}",
            config.base_url, config.model
        );

        Ok(Self { client, config })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

#[async_trait]
impl LlmBackend for AnthropicBackend {
    async fn generate(&self, req: &GenerationRequest) -> Result<String> {
        if req.prompt.is_empty() {
            return Err(Error::InvalidInput("Prompt must not be empty".to_string()));
        }

        let start = Instant::now();
        debug!(
            model = %self.config.model,
            prompt_len = req.prompt.len(),
            "Starting message generation"
        );

        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
            system: req.system.clone().unwrap_or_default(),
            messages: vec![Message {
                role: "user".to_string(),
                content: req.prompt.clone(),
            }],
        };

        let url = format!(
            "{}/v1/messages",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", defaults::ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body: ApiErrorResponse = response.json().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "Anthropic returned {}: {}",
                status, body.error.message
            )));
        }

        let result: MessagesResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {}", e)))?;

        let content = result
            .content
            .first()
            .map(|block| block.text.clone())
            .unwrap_or_default();

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            response_len = content.len(),
            duration_ms = elapsed,
            "Message generation finished"
        );
        if elapsed > 30_000 {
            warn!(
                duration_ms = elapsed,
                prompt_len = req.prompt.len(),
                slow = true,
                "Slow generation operation"
            );
        }
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Request body for the messages endpoint. `max_tokens` is required by the
/// API; `system` is always present (empty string when no instructions).
#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
}

/// Response from the messages endpoint.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// A single content block. Only text blocks are expected here.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl Default for ApiErrorResponse {
    fn default() -> Self {
        Self {
            error: ApiError {
                message: "Unknown error".to_string(),
            },
        }
    }
}
