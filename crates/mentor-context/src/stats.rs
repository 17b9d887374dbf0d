//! Aggregate statistics derived from an already-fetched context.

use mentor_core::{UserContext, UserStats};

/// Derive study statistics from a fetched context.
///
/// Pure and total: a user with no roadmap steps has a completion rate of
/// 0.0, never a division error.
pub fn derive_stats(context: &UserContext) -> UserStats {
    let total_steps: usize = context.roadmaps.iter().map(|r| r.steps.len()).sum();
    let completed_steps: usize = context
        .roadmaps
        .iter()
        .flat_map(|r| r.steps.iter())
        .filter(|s| s.is_completed)
        .count();

    let completion_rate = if total_steps > 0 {
        completed_steps as f64 / total_steps as f64
    } else {
        0.0
    };

    UserStats {
        total_notes: context.notes.len(),
        total_roadmaps: context.roadmaps.len(),
        total_steps,
        completed_steps,
        completion_rate,
    }
}
