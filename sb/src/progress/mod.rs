//! Completion tracking and achievements
//!
//! [`ProgressTracker`] holds the completion set over a task list derived
//! from the current roadmap; [`evaluate`] maps a completion ratio to the
//! achievement ladder.

mod achievements;
mod tracker;

pub use achievements::{Achievement, Milestone, Tier, evaluate};
pub use tracker::{MarkReport, ProgressError, ProgressTracker};
