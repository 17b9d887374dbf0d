//! Core traits for mentor abstractions.
//!
//! These traits define the seams between the orchestrator and its two
//! collaborators — the LLM provider and the upstream data service — enabling
//! pluggable backends and substitutable fakes in tests.

use async_trait::async_trait;

use crate::defaults;
use crate::error::Result;
use crate::models::UserContext;

// =============================================================================
// LLM BACKEND
// =============================================================================

/// Parameters for a single text generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// User prompt (required, non-empty).
    pub prompt: String,
    /// Optional system instructions.
    pub system: Option<String>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output tokens.
    pub max_tokens: u32,
    /// Request strict JSON-object output from backends that support it.
    pub json_mode: bool,
}

impl GenerationRequest {
    /// Build a request with default temperature and token ceiling.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            temperature: defaults::TEMPERATURE,
            max_tokens: defaults::MAX_TOKENS,
            json_mode: false,
        }
    }

    /// Attach system instructions.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Request JSON-object response mode.
    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }
}

/// Backend for text generation (LLM).
///
/// Implementations hold an immutable configuration and a shared HTTP client;
/// they must be safe for concurrent use across in-flight requests.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate text for the given request. One network call, no retry.
    async fn generate(&self, req: &GenerationRequest) -> Result<String>;

    /// Whether the backend honors `json_mode` natively.
    fn supports_json_mode(&self) -> bool {
        false
    }

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

// =============================================================================
// CONTEXT SOURCE
// =============================================================================

/// Source of a user's aggregated learning context.
///
/// A fetch error is distinct from an empty context: empty collections are
/// valid; transport or authorization failure is not.
#[async_trait]
pub trait ContextSource: Send + Sync {
    /// Fetch the user's notes, roadmaps, and desktops. The bearer token is
    /// forwarded opaquely to the upstream service.
    async fn fetch_user_context(&self, user_id: i64, auth_token: &str) -> Result<UserContext>;
}
