//! Prompt templates for roadmap generation and chat
//!
//! Template bodies live in `.pmt` files embedded at compile time and are
//! rendered with handlebars against typed context structs.

mod embedded;

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

/// Context for rendering the roadmap generation prompt
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapContext {
    /// The user's learning goal, verbatim
    pub goal: String,
    /// Ingested document text, empty when none was uploaded
    pub document: String,
}

/// Context for rendering one chat turn
#[derive(Debug, Clone, Serialize)]
pub struct ChatContext {
    /// Bounded roadmap/document context for this turn
    pub context: String,
    /// The user's question, verbatim
    pub question: String,
}

/// Render the roadmap generation prompt
pub fn roadmap_prompt(ctx: &RoadmapContext) -> Result<String> {
    render(embedded::ROADMAP, ctx)
}

/// Render the prompt for one chat turn
pub fn chat_prompt(ctx: &ChatContext) -> Result<String> {
    render(embedded::CHAT, ctx)
}

fn render<T: Serialize>(template: &str, ctx: &T) -> Result<String> {
    debug!("render: rendering template with handlebars");
    let mut hbs = Handlebars::new();
    // Prompts are plain text; HTML escaping would mangle quotes and ampersands.
    hbs.register_escape_fn(handlebars::no_escape);
    hbs.render_template(template, ctx)
        .map_err(|e| eyre!("Failed to render prompt template: {}", e))
}
