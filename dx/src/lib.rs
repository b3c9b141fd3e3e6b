//! DocExtract - best-effort document-to-text extraction
//!
//! Converts study material into plain text suitable for prompt context.
//! Extraction is lossy by design: layout, styling, and non-text content are
//! discarded, and only the text-bearing regions of a document are kept.
//!
//! Recognized formats:
//!
//! - `.pdf` - paginated documents, text per page
//! - `.pptx` - slide decks, text runs in slide order
//! - `.txt` - plain text, read verbatim
//!
//! # Example
//!
//! ```ignore
//! use docextract::extract_text;
//!
//! let text = extract_text(Path::new("lecture.pptx"))?;
//! println!("{} chars", text.chars().count());
//! ```

pub mod cli;
mod extract;

pub use extract::{ExtractError, extract_text};
