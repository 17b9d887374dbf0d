//! LLM provider abstraction for the mentor AI-tutoring backend.
//!
//! Normalizes two hosted API families behind the [`LlmBackend`] trait from
//! `mentor-core`:
//!
//! - [`OpenAiBackend`] — chat-completion style (system-first message list,
//!   native JSON-object response mode)
//! - [`AnthropicBackend`] — message style (top-level `system` field,
//!   required `max_tokens`, no native JSON mode)
//!
//! [`structured::generate_structured`] layers schema-guided JSON generation
//! on top of either backend, with a brace-extraction fallback for noisy
//! model output.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod structured;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use anthropic::AnthropicBackend;
pub use config::{LlmConfig, LlmProvider};
pub use openai::OpenAiBackend;
pub use structured::{extract_json_object, generate_structured, parse_structured_text};

pub use mentor_core::{GenerationRequest, LlmBackend};
