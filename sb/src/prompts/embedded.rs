//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

/// Roadmap generation prompt
pub const ROADMAP: &str = include_str!("../../prompts/roadmap.pmt");

/// Chat turn prompt
pub const CHAT: &str = include_str!("../../prompts/chat.pmt");
