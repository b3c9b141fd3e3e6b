//! Completion state over an extracted task list

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

/// Errors from progress tracking
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("No trackable tasks in the current roadmap")]
    NoTasks,

    #[error("Invalid input! Enter task numbers separated by spaces.")]
    InvalidSelection,
}

/// Outcome of one batch marking call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkReport {
    /// Indices newly marked complete by this batch
    pub newly_completed: Vec<usize>,
    /// Indices outside [1, total], reported individually
    pub invalid: Vec<usize>,
}

/// Tracks completion over the task list derived from the current roadmap
///
/// Indices are 1-based to match the numbered checklist shown to the user.
/// The completion set is scoped to one roadmap; the session discards the
/// tracker whenever the roadmap is regenerated, so stale indices can never
/// carry over.
#[derive(Debug)]
pub struct ProgressTracker {
    tasks: Vec<String>,
    completed: BTreeSet<usize>,
}

impl ProgressTracker {
    /// Create a tracker over a non-empty task list
    pub fn new(tasks: Vec<String>) -> Result<Self, ProgressError> {
        if tasks.is_empty() {
            return Err(ProgressError::NoTasks);
        }
        debug!(total = tasks.len(), "ProgressTracker::new: initialized");
        Ok(Self {
            tasks,
            completed: BTreeSet::new(),
        })
    }

    /// Parse a whitespace-separated selection like "1 3 5"
    ///
    /// Any non-numeric token rejects the whole batch; no indices from a
    /// rejected batch are applied.
    pub fn parse_selection(input: &str) -> Result<Vec<usize>, ProgressError> {
        input
            .split_whitespace()
            .map(|token| token.parse::<usize>().map_err(|_| ProgressError::InvalidSelection))
            .collect()
    }

    /// Mark the given 1-based indices complete
    ///
    /// Duplicate marks are no-ops. Out-of-range indices are collected into
    /// the report without aborting the rest of the batch.
    pub fn mark_complete(&mut self, indices: &[usize]) -> MarkReport {
        let mut report = MarkReport::default();
        for &index in indices {
            if (1..=self.tasks.len()).contains(&index) {
                if self.completed.insert(index) {
                    report.newly_completed.push(index);
                }
            } else {
                report.invalid.push(index);
            }
        }
        debug!(
            newly = report.newly_completed.len(),
            invalid = report.invalid.len(),
            completed = self.completed.len(),
            "mark_complete: batch applied"
        );
        report
    }

    /// Fraction of tasks marked complete, in [0, 1]
    pub fn completion_ratio(&self) -> f64 {
        self.completed.len() as f64 / self.tasks.len() as f64
    }

    /// Number of tasks being tracked
    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    /// Number of tasks marked complete
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Whether the 1-based index is marked complete
    pub fn is_done(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Task lines in roadmap order
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }
}
