use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use docextract::cli::Cli;
use docextract::extract_text;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();

    info!("docextract starting");

    let text = extract_text(&cli.path)
        .context(format!("Failed to extract {}", cli.path.display()))?;

    eprintln!(
        "{} Extracted {} characters",
        "✓".green(),
        text.chars().count()
    );
    println!("{}", text);

    Ok(())
}
