//! CLI argument parsing for StudyBuddy

use clap::Parser;
use std::path::PathBuf;

/// StudyBuddy - interactive study planner
#[derive(Parser, Debug)]
#[command(name = "sb")]
#[command(version, about = "Interactive study-planning assistant", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Learning goal to generate a roadmap for before entering the menu
    pub goal: Option<String>,
}
