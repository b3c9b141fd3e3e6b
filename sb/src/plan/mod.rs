//! Roadmap text processing
//!
//! The generation backend returns a plain-text roadmap; this module strips
//! stray emphasis markup from it and derives the trackable task list.

mod sanitize;
mod tasks;

pub use sanitize::sanitize;
pub use tasks::extract_tasks;
