//! Integration tests for StudyBuddy
//!
//! These drive the session end-to-end through the public API with a
//! scripted generation backend and scripted document extraction.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eyre::eyre;
use tempfile::TempDir;

use studybuddy::progress::Tier;
use studybuddy::{
    ExportFormat, GenerativeClient, LlmError, Message, SessionError, StudySession, TextExtractor,
    evaluate, extract_tasks,
};

/// Generation backend returning scripted responses in order
struct ScriptedClient {
    responses: Mutex<VecDeque<String>>,
}

impl ScriptedClient {
    fn new(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
        })
    }

    fn next(&self) -> Result<String, LlmError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LlmError::InvalidResponse("No more scripted responses".to_string()))
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        self.next()
    }

    async fn chat(&self, _history: &[Message]) -> Result<String, LlmError> {
        self.next()
    }
}

/// Extraction collaborator returning fixed text
struct FixedExtractor(String);

impl TextExtractor for FixedExtractor {
    fn extract_text(&self, _path: &Path) -> eyre::Result<String> {
        if self.0.is_empty() {
            return Err(eyre!("nothing to extract"));
        }
        Ok(self.0.clone())
    }
}

const ROADMAP: &str = "\
**Day 1 (4 hours):**
Topic: Linear regression: 2 hours (Theory)
Activity: Fit a line to housing data: 2 hours (Project)
Day 2 (4 hours):
Topic: Classification: 2 hours (Theory)
Activity: Spam filter exercise: 2 hours (Exercise)
Resources:
StatQuest on YouTube
Hands-On Machine Learning";

// =============================================================================
// Full workflow
// =============================================================================

#[tokio::test]
async fn test_generate_track_and_export_workflow() {
    let temp = TempDir::new().unwrap();
    let client = ScriptedClient::new(&[ROADMAP]);
    let mut session = StudySession::new(
        client,
        Arc::new(FixedExtractor("syllabus text".to_string())),
        temp.path().to_path_buf(),
    );

    // Generate: emphasis markers are stripped before storage.
    let plan = session.generate_plan("Learn ML in 2 days, 4 hours/day").await.unwrap();
    assert!(plan.starts_with("Day 1 (4 hours):"));
    assert!(!plan.contains('*'));

    // The derived task list keeps roadmap order and drops the Resources tail.
    let tasks = extract_tasks(session.plan());
    assert_eq!(tasks.len(), 6);
    assert_eq!(tasks[0], "Day 1 (4 hours):");
    assert_eq!(tasks[5], "Activity: Spam filter exercise: 2 hours (Exercise)");

    // Track: mark half of the tasks, with one bad index in the batch.
    session.begin_tracking().unwrap();
    let report = session.mark_tasks(&[1, 2, 3, 99]).unwrap();
    assert_eq!(report.newly_completed, vec![1, 2, 3]);
    assert_eq!(report.invalid, vec![99]);

    let tracker = session.tracker().unwrap();
    assert_eq!(tracker.completion_ratio(), 0.5);

    let achievement = session.achievement().unwrap();
    assert_eq!(achievement.points, 500);
    assert_eq!(achievement.tier, Tier::MasterLearner);

    // Export both formats; filenames derive from plan length.
    let txt = session.export_plan(ExportFormat::Text).unwrap();
    assert_eq!(std::fs::read_to_string(&txt).unwrap(), session.plan());

    let pdf = session.export_plan(ExportFormat::Pdf).unwrap();
    let bytes = std::fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_ne!(txt, pdf);
}

#[tokio::test]
async fn test_regeneration_discards_completion() {
    let temp = TempDir::new().unwrap();
    let client = ScriptedClient::new(&[ROADMAP, "Day 1 (1 hour):\nTopic: review: 1 hour (Revision)"]);
    let mut session = StudySession::new(
        client,
        Arc::new(FixedExtractor(String::new())),
        temp.path().to_path_buf(),
    );

    session.generate_plan("Learn ML in 2 days").await.unwrap();
    session.begin_tracking().unwrap();
    session.mark_tasks(&[1, 2]).unwrap();
    assert!(session.tracker().unwrap().completion_ratio() > 0.0);

    // A new roadmap invalidates every old index.
    session.generate_plan("Learn ML in 1 day").await.unwrap();
    assert!(session.tracker().is_none());

    let tracker = session.begin_tracking().unwrap();
    assert_eq!(tracker.completion_ratio(), 0.0);
    assert_eq!(tracker.total(), 2);
}

#[tokio::test]
async fn test_milestone_progression() {
    // 3 of 20 tasks: ratio 0.15 -> 150 points -> Consistent Starter,
    // 5 tasks short of the 200-point milestone.
    let achievement = evaluate(0.15);

    assert_eq!(achievement.points, 150);
    assert_eq!(achievement.tier, Tier::ConsistentStarter);
    let milestone = achievement.next_milestone.unwrap();
    assert_eq!(milestone.target_points, 200);
    assert_eq!(milestone.tasks_remaining, 5);
}

// =============================================================================
// Failure paths keep the session alive
// =============================================================================

#[tokio::test]
async fn test_preconditions_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let client = ScriptedClient::new(&[]);
    let mut session = StudySession::new(
        client,
        Arc::new(FixedExtractor(String::new())),
        temp.path().to_path_buf(),
    );

    assert!(matches!(session.begin_tracking(), Err(SessionError::NoPlan)));
    assert!(matches!(
        session.export_plan(ExportFormat::Text),
        Err(SessionError::NoPlan)
    ));
    assert!(matches!(
        session.begin_chat(),
        Err(SessionError::NothingToDiscuss)
    ));

    // Failed ingestion degrades to an empty document, not a dead session.
    assert!(session.ingest_document(Path::new("missing.pdf")).is_err());
    assert_eq!(session.document(), "");
}

#[tokio::test]
async fn test_chat_over_document_without_plan() {
    let temp = TempDir::new().unwrap();
    let client = ScriptedClient::new(&["It covers gradient descent."]);
    let mut session = StudySession::new(
        client,
        Arc::new(FixedExtractor("lecture on gradient descent".to_string())),
        temp.path().to_path_buf(),
    );

    session.ingest_document(Path::new("lecture.pptx")).unwrap();

    let mut conversation = session.begin_chat().unwrap();
    let reply = session
        .chat(&mut conversation, "What does the lecture cover?")
        .await
        .unwrap();

    assert_eq!(reply, "It covers gradient descent.");
}
