//! # mentor-core
//!
//! Core types, traits, and abstractions for the mentor AI-tutoring backend.
//!
//! This crate provides:
//! - The shared error taxonomy and `Result` alias
//! - Domain models (user context, goals, roadmap/note suggestions)
//! - The `LlmBackend` and `ContextSource` traits implemented elsewhere
//! - Centralized default constants
//! - Structured logging field-name constants

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

pub use error::{Error, Result};
pub use models::{
    DailyGoalsResponse, Desktop, Goal, GoalSummary, GoalType, Note, NoteAssistResponse, NoteTag,
    Priority, Roadmap, RoadmapAssistResponse, RoadmapStep, SuggestedRoadmap, SuggestedStep, Tag,
    UserContext, UserStats,
};
pub use traits::{ContextSource, GenerationRequest, LlmBackend};
