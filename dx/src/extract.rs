//! Core extraction implementation
//!
//! Dispatches on the file extension. Slide decks are ZIP archives of XML
//! parts; text lives in `<a:t>` runs inside `ppt/slides/slideN.xml`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use thiserror::Error;
use tracing::debug;

/// Errors produced at the extraction boundary
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Slide deck is not a valid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Slide XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Extract the text-bearing regions of a document as one plain-text string
///
/// The format is chosen by file extension, case-insensitively. Unknown
/// extensions are an error; callers that must not fail degrade the result
/// to an empty string themselves.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    debug!(path = %path.display(), %ext, "extract_text: dispatching");

    match ext.as_str() {
        "pdf" => pdf_text(path),
        "pptx" => pptx_text(path),
        "txt" => std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.display().to_string(),
            source,
        }),
        other if !other.is_empty() => Err(ExtractError::UnsupportedFormat(other.to_string())),
        _ => Err(ExtractError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Extract text from a paginated document
///
/// pdf-extract separates pages with form feeds; pages are trimmed and
/// joined with spaces so downstream consumers see one flat string.
fn pdf_text(path: &Path) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let joined = text
        .split('\x0c')
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    debug!(chars = joined.chars().count(), "pdf_text: extracted");
    Ok(joined)
}

/// Extract text from a slide deck
fn pptx_text(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(file)?;

    // Slide parts are unordered in the archive; sort by slide number so
    // text comes out in presentation order.
    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    slides.sort_by_key(|(number, _)| *number);

    let mut runs = Vec::new();
    for (_, name) in &slides {
        let mut xml = String::new();
        archive
            .by_name(name)?
            .read_to_string(&mut xml)
            .map_err(|source| ExtractError::Io {
                path: name.clone(),
                source,
            })?;
        runs.extend(slide_runs(&xml)?);
    }

    debug!(slide_count = slides.len(), run_count = runs.len(), "pptx_text: extracted");
    Ok(runs.join(" "))
}

/// Slide number for an archive entry named `ppt/slides/slideN.xml`
fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Collect the text runs (`<a:t>` elements) of one slide part
fn slide_runs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut runs = Vec::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Event::End(ref e) if e.local_name().as_ref() == b"t" => in_text_run = false,
            Event::Text(ref e) if in_text_run => {
                if let Ok(text) = e.unescape() {
                    let text = text.trim();
                    if !text.is_empty() {
                        runs.push(text.to_string());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(runs)
}
