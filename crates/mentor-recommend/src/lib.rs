//! Recommendation generation for the mentor AI-tutoring backend.
//!
//! Three operations — daily goals, roadmap assistance, note assistance —
//! each following the same pipeline: fetch the user's study context once,
//! render it into bounded prompt blocks, make one structured LLM call, and
//! shape the parsed JSON into a typed response.

pub mod format;
pub mod prompts;
pub mod service;

pub use service::RecommendationService;
