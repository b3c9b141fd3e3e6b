//! Roadmap export writers
//!
//! Filenames derive from content length and format extension, so exporting
//! two same-length roadmaps to the same directory overwrites the earlier
//! file.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::info;

/// Rough character budget per PDF line for the naive wrap
const WRAP_COLUMNS: usize = 90;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Text,
}

impl ExportFormat {
    /// Parse the format name typed at the menu
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "txt",
        }
    }
}

/// Write the roadmap to `out_dir`, returning the produced path
pub fn write_plan(plan: &str, format: ExportFormat, out_dir: &Path) -> Result<PathBuf> {
    let filename = format!("study_plan_{}.{}", plan.len(), format.extension());
    let path = out_dir.join(filename);

    match format {
        ExportFormat::Text => {
            fs::write(&path, plan).context("Failed to write roadmap text")?;
        }
        ExportFormat::Pdf => write_pdf(plan, &path)?,
    }

    info!(path = %path.display(), "write_plan: roadmap exported");
    Ok(path)
}

/// Render the roadmap as a single-column A4 PDF
fn write_pdf(plan: &str, path: &Path) -> Result<()> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Study Plan", Mm(210.0), Mm(297.0), "roadmap");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| eyre::eyre!("Failed to load PDF font: {}", e))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = 282.0;

    for line in plan.lines().flat_map(wrap_line) {
        if y < 15.0 {
            let (page, new_layer) = doc.add_page(Mm(210.0), Mm(297.0), "roadmap");
            layer = doc.get_page(page).get_layer(new_layer);
            y = 282.0;
        }
        layer.use_text(line, 11.0, Mm(15.0), Mm(y), &font);
        y -= 6.0;
    }

    let file = fs::File::create(path).context("Failed to create PDF file")?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| eyre::eyre!("Failed to save PDF: {}", e))?;
    Ok(())
}

/// Split one roadmap line at a character budget, breaking on whitespace
fn wrap_line(line: &str) -> Vec<String> {
    if line.chars().count() <= WRAP_COLUMNS {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > WRAP_COLUMNS {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
