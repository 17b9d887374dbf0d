//! Provider selection and generation configuration.
//!
//! The provider is selected exactly once at startup and is immutable for the
//! process lifetime. An unsupported provider name is a fatal configuration
//! error, never a per-request failure.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use mentor_core::{defaults, Error, Result};

/// Supported LLM provider families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Chat-completion style API (OpenAI and compatibles).
    OpenAi,
    /// Message style API (Anthropic).
    Anthropic,
}

impl LlmProvider {
    /// Returns string representation of the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(LlmProvider::OpenAi),
            "anthropic" => Ok(LlmProvider::Anthropic),
            other => Err(Error::Config(format!(
                "Unsupported LLM provider: {}",
                other
            ))),
        }
    }
}

/// Configuration for the generation backend.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider family to use.
    pub provider: LlmProvider,
    /// Base URL for the provider's API.
    pub base_url: String,
    /// API key (required by both hosted providers).
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl LlmConfig {
    /// Build configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LLM_PROVIDER` | `openai` |
    /// | `LLM_MODEL` | provider-specific default model |
    /// | `OPENAI_API_KEY` / `ANTHROPIC_API_KEY` | required for the selected provider |
    /// | `OPENAI_BASE_URL` / `ANTHROPIC_BASE_URL` | provider default endpoint |
    /// | `LLM_TIMEOUT_SECS` | 120 |
    pub fn from_env() -> Result<Self> {
        let provider: LlmProvider = std::env::var("LLM_PROVIDER")
            .unwrap_or_else(|_| "openai".to_string())
            .parse()?;

        let timeout_seconds = std::env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::GEN_TIMEOUT_SECS);

        let config = match provider {
            LlmProvider::OpenAi => Self {
                provider,
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| defaults::OPENAI_URL.to_string()),
                api_key: std::env::var("OPENAI_API_KEY")
                    .map_err(|_| Error::Config("OPENAI_API_KEY is not set".to_string()))?,
                model: std::env::var("LLM_MODEL")
                    .unwrap_or_else(|_| defaults::OPENAI_GEN_MODEL.to_string()),
                timeout_seconds,
            },
            LlmProvider::Anthropic => Self {
                provider,
                base_url: std::env::var("ANTHROPIC_BASE_URL")
                    .unwrap_or_else(|_| defaults::ANTHROPIC_URL.to_string()),
                api_key: std::env::var("ANTHROPIC_API_KEY")
                    .map_err(|_| Error::Config("ANTHROPIC_API_KEY is not set".to_string()))?,
                model: std::env::var("LLM_MODEL")
                    .unwrap_or_else(|_| defaults::ANTHROPIC_GEN_MODEL.to_string()),
                timeout_seconds,
            },
        };

        info!(
            provider = %config.provider,
            model = %config.model,
            base_url = %config.base_url,
            timeout_secs = config.timeout_seconds,
            "LLM configuration loaded"
        );

        Ok(config)
    }

    /// Validate invariants that `from_env` cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }
        if self.model.is_empty() {
            return Err(Error::Config("Model name must not be empty".to_string()));
        }
        if self.timeout_seconds == 0 {
            return Err(Error::Config("Timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}
