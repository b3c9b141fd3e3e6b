//! CLI argument parsing for docextract

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dx")]
#[command(version, about = "Best-effort document-to-text extraction", long_about = None)]
pub struct Cli {
    /// Document to extract (.pdf, .pptx, .txt)
    #[arg(required = true)]
    pub path: PathBuf,
}
