//! Session orchestrator
//!
//! Owns the roadmap text, the ingested document text, and the completion
//! tracker, and routes operations to the generation and extraction
//! collaborators. One session lives per process; every outbound call is
//! awaited to completion before the next user action is accepted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::context::build_context;
use crate::export::{self, ExportFormat};
use crate::ingest::TextExtractor;
use crate::llm::{Conversation, GenerativeClient, LlmError};
use crate::plan::{extract_tasks, sanitize};
use crate::progress::{Achievement, MarkReport, ProgressError, ProgressTracker, evaluate};
use crate::prompts::{ChatContext, RoadmapContext, chat_prompt, roadmap_prompt};

/// Errors surfaced to the interactive loop
///
/// None of these are fatal: the menu reports them and keeps running.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Generate a roadmap first!")]
    NoPlan,

    #[error("Generate a roadmap or upload a document first!")]
    NothingToDiscuss,

    #[error("Start tracking progress first!")]
    TrackingNotStarted,

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Document processing failed: {0}")]
    Ingestion(eyre::Report),

    #[error("Prompt rendering failed: {0}")]
    Prompt(eyre::Report),

    #[error("Export failed: {0}")]
    Export(eyre::Report),
}

/// Interactive study session state
///
/// The roadmap and document strings are replaced wholesale, never mutated
/// in place. The tracker is derived state scoped to the current roadmap.
pub struct StudySession {
    client: Arc<dyn GenerativeClient>,
    extractor: Arc<dyn TextExtractor>,
    export_dir: PathBuf,
    plan: String,
    document: String,
    tracker: Option<ProgressTracker>,
}

impl StudySession {
    pub fn new(
        client: Arc<dyn GenerativeClient>,
        extractor: Arc<dyn TextExtractor>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            client,
            extractor,
            export_dir,
            plan: String::new(),
            document: String::new(),
            tracker: None,
        }
    }

    /// Current roadmap text (empty until generated)
    pub fn plan(&self) -> &str {
        &self.plan
    }

    /// Current document text (empty until ingested)
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn has_plan(&self) -> bool {
        !self.plan.is_empty()
    }

    /// Generate a new roadmap for the goal, replacing any existing one
    ///
    /// Completion indices are only meaningful against the roadmap they were
    /// extracted from, so the tracker is discarded along with the old
    /// roadmap. On failure the session is left unchanged.
    pub async fn generate_plan(&mut self, goal: &str) -> Result<&str, SessionError> {
        let prompt = roadmap_prompt(&RoadmapContext {
            goal: goal.to_string(),
            document: self.document.clone(),
        })
        .map_err(SessionError::Prompt)?;

        debug!(goal, prompt_len = prompt.len(), "generate_plan: requesting roadmap");
        let raw = self.client.generate(&prompt).await?;

        self.plan = sanitize(&raw);
        self.tracker = None;
        info!(plan_len = self.plan.len(), "generate_plan: roadmap replaced, tracker reset");
        Ok(&self.plan)
    }

    /// Ingest a document, replacing any existing document text
    ///
    /// Extraction failures degrade to empty document text and are reported
    /// back for display; the session keeps running either way.
    pub fn ingest_document(&mut self, path: &Path) -> Result<usize, SessionError> {
        match self.extractor.extract_text(path) {
            Ok(text) => {
                let chars = text.chars().count();
                self.document = text;
                info!(chars, "ingest_document: document replaced");
                Ok(chars)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ingest_document: extraction failed");
                self.document.clear();
                Err(SessionError::Ingestion(e))
            }
        }
    }

    /// Start a conversation about the current roadmap and material
    pub fn begin_chat(&self) -> Result<Conversation, SessionError> {
        if self.plan.is_empty() && self.document.is_empty() {
            return Err(SessionError::NothingToDiscuss);
        }
        Ok(Conversation::new(Arc::clone(&self.client)))
    }

    /// One chat turn: bounded context plus question, reply back
    ///
    /// Only the capped roadmap/document excerpts travel with the turn; the
    /// conversation handle carries its own history.
    pub async fn chat(
        &self,
        conversation: &mut Conversation,
        message: &str,
    ) -> Result<String, SessionError> {
        if self.plan.is_empty() && self.document.is_empty() {
            return Err(SessionError::NothingToDiscuss);
        }

        let context = build_context(&self.plan, &self.document);
        let prompt = chat_prompt(&ChatContext {
            context,
            question: message.to_string(),
        })
        .map_err(SessionError::Prompt)?;

        debug!(prompt_len = prompt.len(), "chat: sending turn");
        Ok(conversation.send(&prompt).await?)
    }

    /// Derive the task list and initialize tracking if not already active
    ///
    /// The tracker is created lazily on first use and survives menu visits
    /// until the roadmap is regenerated.
    pub fn begin_tracking(&mut self) -> Result<&ProgressTracker, SessionError> {
        if self.plan.is_empty() {
            return Err(SessionError::NoPlan);
        }
        if self.tracker.is_none() {
            let tracker = ProgressTracker::new(extract_tasks(&self.plan))?;
            self.tracker = Some(tracker);
        }
        self.tracker.as_ref().ok_or(SessionError::TrackingNotStarted)
    }

    /// The active tracker, if tracking has started for this roadmap
    pub fn tracker(&self) -> Option<&ProgressTracker> {
        self.tracker.as_ref()
    }

    /// Mark tasks complete by 1-based checklist index
    pub fn mark_tasks(&mut self, indices: &[usize]) -> Result<MarkReport, SessionError> {
        let tracker = self.tracker.as_mut().ok_or(SessionError::TrackingNotStarted)?;
        Ok(tracker.mark_complete(indices))
    }

    /// Achievement state for the current completion ratio
    pub fn achievement(&self) -> Result<Achievement, SessionError> {
        let tracker = self.tracker.as_ref().ok_or(SessionError::TrackingNotStarted)?;
        Ok(evaluate(tracker.completion_ratio()))
    }

    /// Export the roadmap to the configured directory
    pub fn export_plan(&self, format: ExportFormat) -> Result<PathBuf, SessionError> {
        if self.plan.is_empty() {
            return Err(SessionError::NoPlan);
        }
        export::write_plan(&self.plan, format, &self.export_dir).map_err(SessionError::Export)
    }
}
