//! Mock generation backend for deterministic testing.
//!
//! Implements [`LlmBackend`] with scripted responses and a call log so
//! downstream crates can assert on exactly what was sent to the model
//! without any network traffic. Enable with the `mock` feature.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use mentor_core::{Error, GenerationRequest, LlmBackend, Result};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockLlmBackend {
    config: Arc<MockConfig>,
    scripted: Arc<Mutex<VecDeque<String>>>,
    call_log: Arc<Mutex<Vec<RecordedCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    default_response: String,
    json_mode_support: bool,
    model: String,
    failure: Option<String>,
}

/// One generation call as the backend observed it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub system: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub json_mode: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            default_response: "Mock response".to_string(),
            json_mode_support: false,
            model: "mock-model".to_string(),
            failure: None,
        }
    }
}

impl MockLlmBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            scripted: Arc::new(Mutex::new(VecDeque::new())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the response returned when no scripted responses remain.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).default_response = response.into();
        self
    }

    /// Queue a response consumed by the next call, FIFO.
    pub fn with_scripted_response(self, response: impl Into<String>) -> Self {
        self.scripted.lock().unwrap().push_back(response.into());
        self
    }

    /// Control whether the backend advertises native JSON mode.
    pub fn with_json_mode_support(mut self, supported: bool) -> Self {
        Arc::make_mut(&mut self.config).json_mode_support = supported;
        self
    }

    /// Make every call fail with an inference error.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).failure = Some(message.into());
        self
    }

    /// Get all logged calls for assertion.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of generation calls observed.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }
}

impl Default for MockLlmBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmBackend for MockLlmBackend {
    async fn generate(&self, req: &GenerationRequest) -> Result<String> {
        self.call_log.lock().unwrap().push(RecordedCall {
            prompt: req.prompt.clone(),
            system: req.system.clone(),
            temperature: req.temperature,
            max_tokens: req.max_tokens,
            json_mode: req.json_mode,
        });

        if let Some(ref message) = self.config.failure {
            return Err(Error::Inference(message.clone()));
        }

        if let Some(next) = self.scripted.lock().unwrap().pop_front() {
            return Ok(next);
        }

        Ok(self.config.default_response.clone())
    }

    fn supports_json_mode(&self) -> bool {
        self.config.json_mode_support
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
