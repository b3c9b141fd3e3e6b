//! Bounded context assembly for chat turns
//!
//! The generation backend enforces an input-size ceiling; the context
//! window keeps each source comfortably under it. Truncation takes the
//! head of each string, never the tail: early roadmap days are the
//! foundational ones and always survive the cap.

use tracing::debug;

/// Maximum roadmap characters included in one chat turn
pub const PLAN_CONTEXT_CAP: usize = 3000;

/// Maximum document characters included in one chat turn
pub const DOC_CONTEXT_CAP: usize = 5000;

/// Assemble the capped context string for one conversational turn
///
/// Truncation is silent: an oversized source is a normal condition, not an
/// error. The caps are fixed at compile time.
pub fn build_context(plan: &str, document: &str) -> String {
    let plan_part = head(plan, PLAN_CONTEXT_CAP);
    let doc_part = head(document, DOC_CONTEXT_CAP);

    debug!(
        plan_chars = plan_part.chars().count(),
        doc_chars = doc_part.chars().count(),
        "build_context: assembled"
    );

    format!("Roadmap: {}\nDocument Content: {}", plan_part, doc_part)
}

/// First `cap` characters of a string, whole characters only
fn head(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
