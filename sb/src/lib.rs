//! StudyBuddy - interactive study-planning assistant
//!
//! StudyBuddy turns a free-form learning goal (and optional course
//! material) into a structured multi-day roadmap via a generative backend,
//! answers questions about the roadmap and material, tracks per-task
//! completion with an achievement ladder, and exports the roadmap.
//!
//! # Core Concepts
//!
//! - **One session per process**: all mutable state (roadmap, document,
//!   completion) is owned by a single [`session::StudySession`]
//! - **Derived tasks**: the trackable task list is recomputed from the
//!   roadmap text on demand, never stored independently
//! - **Bounded context**: chat turns see capped excerpts of the roadmap and
//!   document, not the full texts or prior turns
//!
//! # Modules
//!
//! - [`llm`] - generation client trait, conversation handle, Gemini client
//! - [`plan`] - sanitizer and task extraction
//! - [`progress`] - completion tracking and achievements
//! - [`context`] - bounded context assembly for chat turns
//! - [`session`] - the session orchestrator
//! - [`config`] - configuration types and loading
//! - [`repl`] - the interactive menu

pub mod cli;
pub mod config;
pub mod context;
pub mod export;
pub mod ingest;
pub mod llm;
pub mod plan;
pub mod progress;
pub mod prompts;
pub mod repl;
pub mod session;

// Re-export commonly used types
pub use config::{Config, ExportConfig, LlmConfig};
pub use context::{DOC_CONTEXT_CAP, PLAN_CONTEXT_CAP, build_context};
pub use export::{ExportFormat, write_plan};
pub use ingest::{FileExtractor, TextExtractor};
pub use llm::{Conversation, GeminiClient, GenerativeClient, LlmError, Message, Role, create_client};
pub use plan::{extract_tasks, sanitize};
pub use progress::{Achievement, MarkReport, Milestone, ProgressError, ProgressTracker, Tier, evaluate};
pub use session::{SessionError, StudySession};
