//! Centralized default constants for the mentor backend.
//!
//! **This module is the single source of truth** for all shared default
//! values. All crates should reference these constants instead of defining
//! their own magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// GENERATION
// =============================================================================

/// Default sampling temperature for LLM generation.
pub const TEMPERATURE: f32 = 0.7;

/// Default maximum output tokens per generation.
pub const MAX_TOKENS: u32 = 2000;

/// Timeout for LLM generation requests (seconds).
pub const GEN_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// PROVIDERS
// =============================================================================

/// Default OpenAI-compatible API endpoint.
pub const OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI generation model.
pub const OPENAI_GEN_MODEL: &str = "gpt-4-turbo-preview";

/// Default Anthropic API endpoint.
pub const ANTHROPIC_URL: &str = "https://api.anthropic.com";

/// Default Anthropic generation model.
pub const ANTHROPIC_GEN_MODEL: &str = "claude-3-opus-20240229";

/// Anthropic API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

// =============================================================================
// UPSTREAM DATA SERVICE
// =============================================================================

/// Default GraphQL endpoint of the upstream data service.
pub const UPSTREAM_GRAPHQL_URL: &str = "http://localhost:3000/graphql";

/// Timeout for upstream context fetches (seconds). Matches the upstream
/// service's own client default.
pub const CONTEXT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// PROMPT CONTEXT BOUNDS
// =============================================================================
//
// These fixed caps are the dominant prompt-size control in the system: no
// token counting or dynamic truncation exists beyond them.

/// Trailing window for "recent notes" in days.
pub const RECENT_NOTES_WINDOW_DAYS: i64 = 7;

/// Maximum recent notes embedded in a prompt.
pub const RECENT_NOTES_LIMIT: usize = 10;

/// Maximum distinct tags shown in the knowledge summary.
pub const TOP_TAGS_LIMIT: usize = 10;

/// Maximum notes embedded in the notes-summary block.
pub const NOTES_SUMMARY_LIMIT: usize = 20;

/// Content preview length per note in the notes-summary block (characters).
pub const NOTE_PREVIEW_CHARS: usize = 100;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 8000;

/// Route prefix for the recommendation endpoints.
pub const API_PREFIX: &str = "/api/ai";

/// Default rate limit: max requests per period.
pub const RATE_LIMIT_REQUESTS: u32 = 60;

/// Default rate limit: period in seconds.
pub const RATE_LIMIT_PERIOD_SECS: u64 = 60;

/// Maximum request body size in bytes (1 MiB — note content is text).
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;
