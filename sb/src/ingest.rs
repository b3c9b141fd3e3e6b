//! Document ingestion seam
//!
//! The session talks to extraction through a trait so tests can substitute
//! scripted material; the real implementation delegates to docextract.

use std::path::Path;

use eyre::Result;

/// Best-effort document-to-text extraction
pub trait TextExtractor: Send + Sync {
    /// Extract the text-bearing regions of a document as plain text
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Extractor backed by the docextract crate
#[derive(Debug, Default)]
pub struct FileExtractor;

impl TextExtractor for FileExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        Ok(docextract::extract_text(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_extractor_reads_plain_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        std::fs::write(&path, "matrix factorization notes").unwrap();

        let text = FileExtractor.extract_text(&path).unwrap();
        assert_eq!(text, "matrix factorization notes");
    }

    #[test]
    fn test_file_extractor_propagates_unsupported_format() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.odp");
        std::fs::write(&path, "irrelevant").unwrap();

        assert!(FileExtractor.extract_text(&path).is_err());
    }
}
