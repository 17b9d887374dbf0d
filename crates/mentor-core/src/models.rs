//! Domain models for the mentor backend.
//!
//! All wire-facing types use camelCase field names to match the upstream
//! data service's GraphQL shapes and the original API contracts. Entities
//! are transient and request-scoped — nothing here is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// =============================================================================
// USER CONTEXT (fetched from the upstream data service)
// =============================================================================

/// A tag attached to notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Join-row shape the upstream GraphQL service returns for note tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteTag {
    pub tag: Tag,
}

/// A study note with its tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<NoteTag>,
}

/// A single step within a learning roadmap.
///
/// `order` values are unique within a roadmap and define presentation
/// sequence. Uniqueness is assumed from upstream, not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub order: i32,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A learning roadmap with ordered steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<RoadmapStep>,
}

/// A user workspace grouping notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Desktop {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A user's aggregated learning data, fetched fresh per request.
///
/// Immutable once returned; owned solely by the orchestrating call that
/// requested it. Empty collections are a valid, non-error context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub roadmaps: Vec<Roadmap>,
    #[serde(default)]
    pub desktops: Vec<Desktop>,
}

/// Derived statistics over a [`UserContext`]. Never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_notes: usize,
    pub total_roadmaps: usize,
    pub total_steps: usize,
    pub completed_steps: usize,
    /// `completed_steps / total_steps`, or `0.0` when there are no steps.
    pub completion_rate: f64,
}

// =============================================================================
// RECOMMENDATION OUTPUTS (produced by the LLM, validated after parsing)
// =============================================================================

/// Kind of daily goal the model may suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    RoadmapStep,
    NoteReview,
    NewNote,
    RoadmapCreation,
}

/// Goal priority as emitted by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single suggested daily goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Estimated effort in minutes.
    pub estimated_time: u32,
    /// Free-form pointer into the user's content (e.g. roadmapId/stepId).
    /// The model fills this loosely; its inner shape is not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_content: Option<JsonValue>,
    pub reasoning: String,
}

/// Aggregate summary returned alongside daily goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub total_goals: usize,
    /// Sum of each goal's `estimated_time`, in minutes.
    pub estimated_total_time: u32,
}

/// Response contract for the daily-goals operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyGoalsResponse {
    pub goals: Vec<Goal>,
    pub summary: GoalSummary,
}

/// A step of a model-suggested roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedStep {
    pub order: i32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
}

/// A model-suggested learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedRoadmap {
    pub title: String,
    pub description: String,
    pub steps: Vec<SuggestedStep>,
}

/// Response contract for the roadmap-assist operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapAssistResponse {
    pub suggested_roadmap: SuggestedRoadmap,
    pub reasoning: String,
    #[serde(default)]
    pub related_notes: Vec<i64>,
}

/// Response contract for the note-assist operation.
///
/// `suggestions` stays a free-form mapping: the model's suggestion shape
/// (title, improved content, tags, related notes, gaps, improvements) is
/// forwarded to the caller without per-field validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteAssistResponse {
    pub suggestions: JsonValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_note() -> Note {
        serde_json::from_value(json!({
            "id": 1,
            "title": "Ownership in Rust",
            "content": "Every value has a single owner.",
            "createdAt": "2026-08-20T10:00:00Z",
            "updatedAt": "2026-08-20T10:00:00Z",
            "tags": [{"tag": {"id": 7, "name": "rust"}}]
        }))
        .unwrap()
    }

    #[test]
    fn test_note_deserializes_camel_case() {
        let note = sample_note();
        assert_eq!(note.id, 1);
        assert_eq!(note.tags.len(), 1);
        assert_eq!(note.tags[0].tag.name, "rust");
    }

    #[test]
    fn test_note_missing_tags_defaults_empty() {
        let note: Note = serde_json::from_value(json!({
            "id": 2,
            "title": "t",
            "content": "c",
            "createdAt": "2026-08-20T10:00:00Z",
            "updatedAt": "2026-08-20T10:00:00Z"
        }))
        .unwrap();
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_roadmap_step_camel_case_fields() {
        let step: RoadmapStep = serde_json::from_value(json!({
            "id": 3,
            "title": "Borrow checker",
            "description": null,
            "order": 2,
            "isCompleted": false,
            "createdAt": "2026-08-01T00:00:00Z"
        }))
        .unwrap();
        assert!(!step.is_completed);
        assert_eq!(step.order, 2);
    }

    #[test]
    fn test_user_context_default_is_empty() {
        let ctx = UserContext::default();
        assert!(ctx.notes.is_empty());
        assert!(ctx.roadmaps.is_empty());
        assert!(ctx.desktops.is_empty());
    }

    #[test]
    fn test_goal_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&GoalType::RoadmapStep).unwrap(),
            "\"roadmap_step\""
        );
        assert_eq!(
            serde_json::to_string(&GoalType::NoteReview).unwrap(),
            "\"note_review\""
        );
        let parsed: GoalType = serde_json::from_str("\"roadmap_creation\"").unwrap();
        assert_eq!(parsed, GoalType::RoadmapCreation);
    }

    #[test]
    fn test_priority_wire_names() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn test_goal_deserializes_llm_payload() {
        let goal: Goal = serde_json::from_value(json!({
            "type": "roadmap_step",
            "title": "Finish lifetimes chapter",
            "description": "Work through the remaining examples",
            "priority": "high",
            "estimatedTime": 45,
            "relatedContent": {"roadmapId": 1, "stepId": 2},
            "reasoning": "Oldest incomplete step"
        }))
        .unwrap();
        assert_eq!(goal.goal_type, GoalType::RoadmapStep);
        assert_eq!(goal.estimated_time, 45);
        assert!(goal.id.is_none());
        assert!(goal.related_content.is_some());
    }

    #[test]
    fn test_goal_serializes_without_absent_optionals() {
        let goal = Goal {
            id: None,
            goal_type: GoalType::NewNote,
            title: "t".into(),
            description: "d".into(),
            priority: Priority::Low,
            estimated_time: 30,
            related_content: None,
            reasoning: "r".into(),
        };
        let json = serde_json::to_value(&goal).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("relatedContent").is_none());
        assert_eq!(json["estimatedTime"], 30);
    }

    #[test]
    fn test_roadmap_assist_response_round_trip() {
        let payload = json!({
            "suggestedRoadmap": {
                "title": "Learn Rust",
                "description": "From zero to systems",
                "steps": [{
                    "order": 1,
                    "title": "Install toolchain",
                    "description": "rustup and cargo",
                    "estimatedTime": 30,
                    "prerequisites": [],
                    "learningObjectives": ["toolchain basics"]
                }]
            },
            "reasoning": "Progressive structure",
            "relatedNotes": [1, 2]
        });
        let parsed: RoadmapAssistResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.suggested_roadmap.steps.len(), 1);
        assert_eq!(parsed.related_notes, vec![1, 2]);
        assert_eq!(parsed.suggested_roadmap.steps[0].estimated_time, Some(30));
    }

    #[test]
    fn test_goal_summary_serializes_camel_case() {
        let summary = GoalSummary {
            total_goals: 3,
            estimated_total_time: 120,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalGoals"], 3);
        assert_eq!(json["estimatedTotalTime"], 120);
    }
}
