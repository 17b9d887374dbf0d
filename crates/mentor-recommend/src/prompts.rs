//! Prompt construction for the recommendation operations.
//!
//! System prompts carry the role and the expected JSON shape; user prompts
//! embed the bounded context blocks from [`crate::format`]. Keeping both
//! here makes prompt changes reviewable in one place.

use mentor_core::{defaults, UserContext, UserStats};

use crate::format::{
    format_incomplete_steps, format_knowledge_from_tags, format_notes_summary,
    format_recent_notes,
};

/// System prompt for daily goal generation.
pub const DAILY_GOALS_SYSTEM: &str = r#"You are an AI tutor helping students with their learning.
Analyze the user's study data and suggest 3-5 daily goals that are:
1. Specific and actionable
2. Based on their incomplete roadmaps and recent notes
3. Appropriate for a single study session (30-120 minutes total)
4. Prioritized by importance and urgency

Return a JSON array of goals with this structure:
{
    "goals": [
        {
            "type": "roadmap_step" | "note_review" | "new_note" | "roadmap_creation",
            "title": "Goal title",
            "description": "Detailed description",
            "priority": "high" | "medium" | "low",
            "estimatedTime": 30,
            "relatedContent": {
                "roadmapId": 1,
                "stepId": 2
            },
            "reasoning": "Why this goal is suggested"
        }
    ]
}"#;

/// System prompt for roadmap creation assistance.
pub const ROADMAP_ASSIST_SYSTEM: &str = r#"You are an AI tutor helping create learning roadmaps.
Create a structured learning roadmap that breaks down a topic into manageable steps.
Each step should be:
1. Clear and specific
2. Build upon previous steps
3. Include learning objectives
4. Have estimated time if possible

Return JSON with this structure:
{
    "suggestedRoadmap": {
        "title": "Roadmap title",
        "description": "Overview",
        "steps": [
            {
                "order": 1,
                "title": "Step title",
                "description": "What to learn",
                "estimatedTime": 60,
                "prerequisites": ["topic1", "topic2"],
                "learningObjectives": ["objective1", "objective2"]
            }
        ]
    },
    "reasoning": "Why this structure",
    "relatedNotes": [1, 2, 3]
}"#;

/// System prompt for note creation assistance.
pub const NOTE_ASSIST_SYSTEM: &str = r#"You are an AI tutor helping improve study notes.
Analyze the note content and provide suggestions for:
1. Better title (if missing or unclear)
2. Improved content structure
3. Relevant tags based on content
4. Related notes from user's collection
5. Content gaps or areas needing more detail

Return JSON with this structure:
{
    "suggestions": {
        "title": "Suggested title",
        "improvedContent": "Improved content (if significant changes)",
        "suggestedTags": ["tag1", "tag2"],
        "relatedNotes": [
            {
                "id": 1,
                "title": "Note title",
                "relevance": 0.85,
                "reason": "Why it's related"
            }
        ],
        "contentGaps": ["gap1", "gap2"],
        "improvements": [
            {
                "type": "structure" | "clarity" | "completeness",
                "suggestion": "What to improve",
                "location": "Where in content"
            }
        ]
    }
}"#;

/// Build the user prompt for daily goal generation.
pub fn build_daily_goals_prompt(stats: &UserStats, context: &UserContext) -> String {
    format!(
        "User's study context:\n\
         - Total notes: {}\n\
         - Total roadmaps: {}\n\
         - Completion rate: {:.1}%\n\
         \n\
         Incomplete roadmap steps:\n\
         {}\n\
         \n\
         Recent notes (last {} days):\n\
         {}\n\
         \n\
         Suggest daily goals for today.",
        stats.total_notes,
        stats.total_roadmaps,
        stats.completion_rate * 100.0,
        format_incomplete_steps(&context.roadmaps),
        defaults::RECENT_NOTES_WINDOW_DAYS,
        format_recent_notes(&context.notes, defaults::RECENT_NOTES_WINDOW_DAYS),
    )
}

/// Build the user prompt for roadmap creation assistance.
pub fn build_roadmap_prompt(topic: &str, description: Option<&str>, context: &UserContext) -> String {
    format!(
        "Create a learning roadmap for:\n\
         Topic: {}\n\
         Description: {}\n\
         \n\
         User's existing knowledge (from their notes):\n\
         {}\n\
         \n\
         Suggest a comprehensive roadmap.",
        topic,
        description.unwrap_or("No description provided"),
        format_knowledge_from_tags(&context.notes),
    )
}

/// Build the user prompt for note creation assistance.
pub fn build_note_prompt(title: Option<&str>, content: &str, context: &UserContext) -> String {
    format!(
        "Analyze this note:\n\
         Title: {}\n\
         Content: {}\n\
         \n\
         User's existing notes for context:\n\
         {}\n\
         \n\
         Provide suggestions.",
        title.unwrap_or("No title"),
        content,
        format_notes_summary(&context.notes),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{NO_INCOMPLETE_STEPS, NO_RECENT_NOTES};

    #[test]
    fn test_daily_goals_prompt_embeds_stats_and_sentinels() {
        let stats = UserStats {
            total_notes: 4,
            total_roadmaps: 2,
            total_steps: 8,
            completed_steps: 4,
            completion_rate: 0.5,
        };
        let prompt = build_daily_goals_prompt(&stats, &UserContext::default());

        assert!(prompt.contains("- Total notes: 4"));
        assert!(prompt.contains("- Total roadmaps: 2"));
        assert!(prompt.contains("- Completion rate: 50.0%"));
        assert!(prompt.contains(NO_INCOMPLETE_STEPS));
        assert!(prompt.contains(NO_RECENT_NOTES));
        assert!(prompt.ends_with("Suggest daily goals for today."));
    }

    #[test]
    fn test_roadmap_prompt_description_fallback() {
        let prompt = build_roadmap_prompt("Linear Algebra", None, &UserContext::default());
        assert!(prompt.contains("Topic: Linear Algebra"));
        assert!(prompt.contains("Description: No description provided"));
    }

    #[test]
    fn test_roadmap_prompt_uses_given_description() {
        let prompt = build_roadmap_prompt(
            "Linear Algebra",
            Some("Matrix-focused"),
            &UserContext::default(),
        );
        assert!(prompt.contains("Description: Matrix-focused"));
    }

    #[test]
    fn test_note_prompt_title_fallback() {
        let prompt = build_note_prompt(None, "Some content", &UserContext::default());
        assert!(prompt.contains("Title: No title"));
        assert!(prompt.contains("Content: Some content"));
        assert!(prompt.ends_with("Provide suggestions."));
    }

    #[test]
    fn test_system_prompts_name_their_shapes() {
        assert!(DAILY_GOALS_SYSTEM.contains("\"goals\""));
        assert!(ROADMAP_ASSIST_SYSTEM.contains("\"suggestedRoadmap\""));
        assert!(NOTE_ASSIST_SYSTEM.contains("\"suggestions\""));
    }
}
