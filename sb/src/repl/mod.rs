//! Interactive menu for StudyBuddy
//!
//! Wires the session to its collaborators and drives the menu-driven
//! request/response loop.

mod menu;

pub use menu::MenuSession;

use std::sync::Arc;

use eyre::Result;

use crate::config::Config;
use crate::ingest::FileExtractor;
use crate::llm::create_client;
use crate::session::StudySession;

/// Run the interactive menu
///
/// This is the main entry point for `sb`.
pub async fn run_interactive(config: &Config, initial_goal: Option<String>) -> Result<()> {
    // Validate API key early
    config.validate()?;

    let client = create_client(&config.llm)
        .map_err(|e| eyre::eyre!("Failed to create generation client: {}", e))?;
    let extractor = Arc::new(FileExtractor);

    let session = StudySession::new(client, extractor, config.export.dir.clone());
    let mut menu = MenuSession::new(session);
    menu.run(initial_goal).await
}
