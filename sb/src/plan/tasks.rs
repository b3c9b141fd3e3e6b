//! Task extraction from roadmap text
//!
//! A heuristic line classifier, not a grammar: a line is a task when it
//! opens a day block or carries one of the recognized field markers.
//! Anything else the generator emits (commentary, the Resources section)
//! is dropped without complaint.

use tracing::debug;

/// Field markers that tag a line as a trackable task
const FIELD_MARKERS: [&str; 2] = ["topic:", "activity:"];

/// Extract the trackable task lines of a roadmap, preserving order
///
/// Lines are trimmed before classification and emitted trimmed. Empty
/// input yields an empty list.
pub fn extract_tasks(plan: &str) -> Vec<String> {
    let tasks: Vec<String> = plan
        .lines()
        .map(str::trim)
        .filter(|line| is_task_line(line))
        .map(str::to_string)
        .collect();

    debug!(task_count = tasks.len(), "extract_tasks: classified roadmap lines");
    tasks
}

/// A task line starts with a day marker or contains a field marker
///
/// The day marker is the literal `Day` followed by a separator, so
/// "Daylight reading" is commentary while "Day 1 (5 hours):" is a task.
fn is_task_line(line: &str) -> bool {
    if let Some(rest) = line.strip_prefix("Day")
        && rest.chars().next().is_some_and(|c| !c.is_alphanumeric())
    {
        return true;
    }

    let lower = line.to_lowercase();
    FIELD_MARKERS.iter().any(|marker| lower.contains(marker))
}
