//! Deterministic context formatters.
//!
//! These build the bounded text blocks embedded in recommendation prompts.
//! Every formatter is pure and capped, so prompt size stays predictable no
//! matter how much data a user has accumulated.

use chrono::{Duration, Utc};

use mentor_core::{defaults, Note, Roadmap};

/// Sentinel when no roadmap has an incomplete step.
pub const NO_INCOMPLETE_STEPS: &str = "No incomplete steps";
/// Sentinel when no note falls inside the recency window.
pub const NO_RECENT_NOTES: &str = "No recent notes";

/// Format incomplete roadmap steps, grouped per roadmap.
///
/// Roadmaps with every step completed are skipped entirely.
pub fn format_incomplete_steps(roadmaps: &[Roadmap]) -> String {
    let mut lines = Vec::new();
    for roadmap in roadmaps {
        let incomplete: Vec<_> = roadmap.steps.iter().filter(|s| !s.is_completed).collect();
        if incomplete.is_empty() {
            continue;
        }
        lines.push(format!("\n{}:", roadmap.title));
        for step in incomplete {
            lines.push(format!("  - Step {}: {}", step.order, step.title));
        }
    }
    if lines.is_empty() {
        NO_INCOMPLETE_STEPS.to_string()
    } else {
        lines.join("\n")
    }
}

/// Format titles of notes created within the last `days` days.
///
/// At most [`defaults::RECENT_NOTES_LIMIT`] titles, in the order the notes
/// arrived from upstream.
pub fn format_recent_notes(notes: &[Note], days: i64) -> String {
    let cutoff = Utc::now() - Duration::days(days);
    let recent: Vec<_> = notes
        .iter()
        .filter(|n| n.created_at > cutoff)
        .take(defaults::RECENT_NOTES_LIMIT)
        .map(|n| format!("- {}", n.title))
        .collect();
    if recent.is_empty() {
        NO_RECENT_NOTES.to_string()
    } else {
        recent.join("\n")
    }
}

/// Summarize the user's knowledge as their most frequent tags.
///
/// Tags are counted across all notes, sorted by count descending with ties
/// keeping first-encounter order, and capped at
/// [`defaults::TOP_TAGS_LIMIT`]. No notes or no tags yields an empty string.
pub fn format_knowledge_from_tags(notes: &[Note]) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for note in notes {
        for note_tag in &note.tags {
            let name = &note_tag.tag.name;
            match counts.iter_mut().find(|(tag, _)| tag == name) {
                Some((_, count)) => *count += 1,
                None => counts.push((name.clone(), 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .iter()
        .take(defaults::TOP_TAGS_LIMIT)
        .map(|(tag, count)| format!("{} ({} notes)", tag, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summarize up to [`defaults::NOTES_SUMMARY_LIMIT`] notes as one line each.
///
/// Content is truncated to [`defaults::NOTE_PREVIEW_CHARS`] characters and
/// always followed by `...`, even when nothing was cut.
pub fn format_notes_summary(notes: &[Note]) -> String {
    notes
        .iter()
        .take(defaults::NOTES_SUMMARY_LIMIT)
        .map(|n| {
            let preview: String = n.content.chars().take(defaults::NOTE_PREVIEW_CHARS).collect();
            format!("- [{}] {}: {}...", n.id, n.title, preview)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use mentor_core::{NoteTag, RoadmapStep, Tag};

    fn note(id: i64, title: &str, content: &str, created_at: DateTime<Utc>) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at,
            updated_at: created_at,
            tags: Vec::new(),
        }
    }

    fn tagged(mut n: Note, tags: &[&str]) -> Note {
        n.tags = tags
            .iter()
            .enumerate()
            .map(|(i, name)| NoteTag {
                tag: Tag {
                    id: i as i64 + 1,
                    name: name.to_string(),
                },
            })
            .collect();
        n
    }

    fn step(order: i32, title: &str, is_completed: bool) -> RoadmapStep {
        RoadmapStep {
            id: order as i64,
            title: title.to_string(),
            description: None,
            order,
            is_completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_incomplete_steps_groups_by_roadmap() {
        let roadmaps = vec![
            Roadmap {
                id: 1,
                title: "Rust Basics".to_string(),
                description: None,
                steps: vec![step(1, "Ownership", true), step(2, "Lifetimes", false)],
            },
            Roadmap {
                id: 2,
                title: "Async".to_string(),
                description: None,
                steps: vec![step(1, "Futures", false)],
            },
        ];

        let text = format_incomplete_steps(&roadmaps);
        assert!(text.contains("Rust Basics:"));
        assert!(text.contains("  - Step 2: Lifetimes"));
        assert!(!text.contains("Ownership"));
        assert!(text.contains("Async:"));
        assert!(text.contains("  - Step 1: Futures"));
    }

    #[test]
    fn test_fully_completed_roadmap_is_skipped() {
        let roadmaps = vec![Roadmap {
            id: 1,
            title: "Done".to_string(),
            description: None,
            steps: vec![step(1, "a", true)],
        }];
        assert_eq!(format_incomplete_steps(&roadmaps), NO_INCOMPLETE_STEPS);
    }

    #[test]
    fn test_no_roadmaps_sentinel() {
        assert_eq!(format_incomplete_steps(&[]), NO_INCOMPLETE_STEPS);
    }

    #[test]
    fn test_recent_notes_window_and_cap() {
        let now = Utc::now();
        let mut notes: Vec<Note> = (0..15)
            .map(|i| {
                note(
                    i,
                    &format!("Note {}", i),
                    "",
                    now - Duration::days(1),
                )
            })
            .collect();
        notes.push(note(99, "Old note", "", now - Duration::days(30)));

        let text = format_recent_notes(&notes, 7);
        let lines: Vec<_> = text.lines().collect();
        // 15 qualify, only the first 10 appear.
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "- Note 0");
        assert_eq!(lines[9], "- Note 9");
        assert!(!text.contains("Old note"));
    }

    #[test]
    fn test_recent_notes_sentinel_when_all_old() {
        let notes = vec![note(1, "Old", "", Utc::now() - Duration::days(10))];
        assert_eq!(format_recent_notes(&notes, 7), NO_RECENT_NOTES);
    }

    #[test]
    fn test_knowledge_sorts_by_count_with_stable_ties() {
        let now = Utc::now();
        let notes = vec![
            tagged(note(1, "a", "", now), &["python", "math"]),
            tagged(note(2, "b", "", now), &["python"]),
            tagged(note(3, "c", "", now), &["python", "history"]),
        ];

        let text = format_knowledge_from_tags(&notes);
        // math and history tie at 1; math was seen first.
        assert_eq!(text, "python (3 notes), math (1 notes), history (1 notes)");
    }

    #[test]
    fn test_knowledge_caps_at_top_ten() {
        let now = Utc::now();
        let notes: Vec<Note> = (0..12)
            .map(|i| tagged(note(i, "n", "", now), &[&format!("tag{}", i)]))
            .collect();

        let text = format_knowledge_from_tags(&notes);
        assert_eq!(text.matches(" notes)").count(), 10);
    }

    #[test]
    fn test_knowledge_empty_without_tags() {
        let notes = vec![note(1, "untagged", "", Utc::now())];
        assert_eq!(format_knowledge_from_tags(&notes), "");
    }

    #[test]
    fn test_notes_summary_truncates_and_always_ellipses() {
        let now = Utc::now();
        let long_content = "x".repeat(150);
        let notes = vec![
            note(1, "Short", "tiny", now),
            note(2, "Long", &long_content, now),
        ];

        let text = format_notes_summary(&notes);
        let lines: Vec<_> = text.lines().collect();
        // Short content still gets the trailing ellipsis.
        assert_eq!(lines[0], "- [1] Short: tiny...");
        assert_eq!(lines[1], format!("- [2] Long: {}...", "x".repeat(100)));
    }

    #[test]
    fn test_notes_summary_truncation_is_char_safe() {
        let content = "é".repeat(120);
        let notes = vec![note(1, "Accents", &content, Utc::now())];

        let text = format_notes_summary(&notes);
        assert_eq!(text, format!("- [1] Accents: {}...", "é".repeat(100)));
    }

    #[test]
    fn test_notes_summary_caps_at_twenty() {
        let now = Utc::now();
        let notes: Vec<Note> = (0..25)
            .map(|i| note(i, &format!("Note {}", i), "c", now))
            .collect();

        let text = format_notes_summary(&notes);
        assert_eq!(text.lines().count(), 20);
    }

    #[test]
    fn test_notes_summary_empty_input() {
        assert_eq!(format_notes_summary(&[]), "");
    }
}
