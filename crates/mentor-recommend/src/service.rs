//! Recommendation orchestration.
//!
//! Each operation runs the same pipeline: one upstream context fetch, one
//! prompt build, one LLM call, then shaping of the parsed JSON into a typed
//! response. Statistics are derived from the already-fetched context rather
//! than fetched again.

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, instrument, warn};

use mentor_context::derive_stats;
use mentor_core::{
    ContextSource, DailyGoalsResponse, Error, Goal, GoalSummary, LlmBackend,
    NoteAssistResponse, Result, RoadmapAssistResponse,
};
use mentor_inference::generate_structured;

use crate::prompts::{
    build_daily_goals_prompt, build_note_prompt, build_roadmap_prompt, DAILY_GOALS_SYSTEM,
    NOTE_ASSIST_SYSTEM, ROADMAP_ASSIST_SYSTEM,
};

/// Orchestrates context fetching and LLM calls for the three
/// recommendation operations.
#[derive(Clone)]
pub struct RecommendationService {
    llm: Arc<dyn LlmBackend>,
    context: Arc<dyn ContextSource>,
}

impl RecommendationService {
    /// Create a service over the given backend and context source.
    pub fn new(llm: Arc<dyn LlmBackend>, context: Arc<dyn ContextSource>) -> Self {
        Self { llm, context }
    }

    /// Generate 3-5 daily study goals for a user.
    ///
    /// A reply without a `goals` key yields an empty goal list; a `goals`
    /// key that is not a valid goal array is a malformed-output error.
    #[instrument(skip(self, auth_token), fields(op = "daily_goals"))]
    pub async fn generate_daily_goals(
        &self,
        user_id: i64,
        auth_token: &str,
    ) -> Result<DailyGoalsResponse> {
        let start = Instant::now();
        let context = self.context.fetch_user_context(user_id, auth_token).await?;
        let stats = derive_stats(&context);

        let prompt = build_daily_goals_prompt(&stats, &context);
        debug!(user_id, prompt_len = prompt.len(), "Daily goals prompt built");

        let reply =
            generate_structured(self.llm.as_ref(), &prompt, Some(DAILY_GOALS_SYSTEM), None)
                .await?;

        let goals: Vec<Goal> = match reply.get("goals") {
            None => Vec::new(),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                warn!(user_id, error = %e, "Goal list failed validation");
                Error::MalformedOutput(format!("Invalid goals payload: {}", e))
            })?,
        };

        let summary = GoalSummary {
            total_goals: goals.len(),
            estimated_total_time: goals.iter().map(|g| g.estimated_time).sum(),
        };

        info!(
            user_id,
            result_count = goals.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Daily goals generated"
        );
        Ok(DailyGoalsResponse { goals, summary })
    }

    /// Suggest a structured learning roadmap for a topic.
    #[instrument(skip(self, description, auth_token), fields(op = "roadmap_assist"))]
    pub async fn assist_roadmap_creation(
        &self,
        user_id: i64,
        topic: &str,
        description: Option<&str>,
        auth_token: &str,
    ) -> Result<RoadmapAssistResponse> {
        if topic.trim().is_empty() {
            return Err(Error::InvalidInput("Topic must not be empty".to_string()));
        }

        let start = Instant::now();
        let context = self.context.fetch_user_context(user_id, auth_token).await?;

        let prompt = build_roadmap_prompt(topic, description, &context);
        let reply =
            generate_structured(self.llm.as_ref(), &prompt, Some(ROADMAP_ASSIST_SYSTEM), None)
                .await?;

        let response: RoadmapAssistResponse = serde_json::from_value(reply).map_err(|e| {
            warn!(user_id, error = %e, "Roadmap suggestion failed validation");
            Error::MalformedOutput(format!("Invalid roadmap payload: {}", e))
        })?;

        info!(
            user_id,
            result_count = response.suggested_roadmap.steps.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Roadmap suggestion generated"
        );
        Ok(response)
    }

    /// Suggest improvements for a note being written.
    ///
    /// The reply's `suggestions` sub-object is returned as-is; a reply
    /// without one yields an empty mapping.
    #[instrument(skip(self, content, title, auth_token), fields(op = "note_assist"))]
    pub async fn assist_note_creation(
        &self,
        user_id: i64,
        content: &str,
        title: Option<&str>,
        auth_token: &str,
    ) -> Result<NoteAssistResponse> {
        if content.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Note content must not be empty".to_string(),
            ));
        }

        let start = Instant::now();
        let context = self.context.fetch_user_context(user_id, auth_token).await?;

        let prompt = build_note_prompt(title, content, &context);
        let reply =
            generate_structured(self.llm.as_ref(), &prompt, Some(NOTE_ASSIST_SYSTEM), None)
                .await?;

        let suggestions: JsonValue = reply
            .get("suggestions")
            .cloned()
            .unwrap_or_else(|| json!({}));

        info!(
            user_id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Note suggestions generated"
        );
        Ok(NoteAssistResponse { suggestions })
    }
}
