//! Menu loop and sub-loops
//!
//! One user action is fully processed before the next is accepted. No
//! session error escapes this loop; only readline failures do.

use std::path::Path;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::export::ExportFormat;
use crate::progress::ProgressTracker;
use crate::session::StudySession;

/// Interactive menu over a study session
pub struct MenuSession {
    session: StudySession,
}

/// Result of handling one menu choice
enum MenuResult {
    Continue,
    Quit,
}

impl MenuSession {
    pub fn new(session: StudySession) -> Self {
        Self { session }
    }

    /// Run the menu loop until Exit or Ctrl-D
    pub async fn run(&mut self, initial_goal: Option<String>) -> Result<()> {
        let mut rl = DefaultEditor::new()
            .map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        self.print_welcome();

        if let Some(goal) = initial_goal {
            println!("{} {}", ">".bright_green(), goal);
            self.generate_for(&goal).await;
        }

        loop {
            self.print_menu();
            match rl.readline("\nChoose option (1-6): ") {
                Ok(line) => {
                    let choice = line.trim().to_string();
                    if choice.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(&choice);

                    debug!(%choice, "run: dispatching menu choice");
                    match self.dispatch(&choice, &mut rl).await? {
                        MenuResult::Continue => continue,
                        MenuResult::Quit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    async fn dispatch(&mut self, choice: &str, rl: &mut DefaultEditor) -> Result<MenuResult> {
        match choice {
            "1" => self.generate(rl).await?,
            "2" => self.upload(rl)?,
            "3" => self.chat(rl).await?,
            "4" => self.track(rl)?,
            "5" => self.export(rl)?,
            "6" => return Ok(MenuResult::Quit),
            other => {
                println!("{} Invalid choice: {}", "?".yellow(), other);
            }
        }
        Ok(MenuResult::Continue)
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Study Buddy".bright_cyan().bold());
        println!("Plan, discuss, and track your learning.");
    }

    fn print_menu(&self) {
        println!();
        println!("{}", "Study Planner".bold());
        println!("  1. Generate Roadmap");
        println!("  2. Upload Document (PDF/PPTX)");
        println!("  3. Chat with Study Buddy");
        println!("  4. Track Progress");
        println!("  5. Export Roadmap");
        println!("  6. Exit");
    }

    /// Prompt for one line; None cancels the action (Ctrl-C/Ctrl-D)
    fn prompt(rl: &mut DefaultEditor, text: &str) -> Result<Option<String>> {
        match rl.readline(text) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                Ok(None)
            }
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }

    async fn generate(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(goal) = Self::prompt(rl, "\nEnter your goal (e.g., 'Learn ML in 10 days'): ")?
        else {
            return Ok(());
        };
        if goal.is_empty() {
            println!("{} Nothing to plan for.", "?".yellow());
            return Ok(());
        }

        self.generate_for(&goal).await;
        Ok(())
    }

    async fn generate_for(&mut self, goal: &str) {
        println!("{}", "Generating roadmap...".dimmed());
        match self.session.generate_plan(goal).await {
            Ok(plan) => {
                println!();
                println!("{}", "Your Roadmap:".bright_cyan().bold());
                println!("{}", plan);
            }
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
    }

    fn upload(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(path) = Self::prompt(rl, "\nEnter document path: ")? else {
            return Ok(());
        };
        if path.is_empty() {
            return Ok(());
        }

        let path = path.trim_matches('"');
        match self.session.ingest_document(Path::new(path)) {
            Ok(chars) => println!("{} Processed {} characters", "✓".green(), chars),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        Ok(())
    }

    /// Chat sub-loop; returns to the menu on 'exit' or Ctrl-C/Ctrl-D
    async fn chat(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let mut conversation = match self.session.begin_chat() {
            Ok(c) => c,
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
                return Ok(());
            }
        };

        println!();
        println!(
            "{} Type {} to return to the menu.",
            "Ask anything about your roadmap and material.".bright_green(),
            "'exit'".yellow()
        );

        loop {
            let Some(input) = Self::prompt(rl, &format!("{} ", "You:".bright_green()))? else {
                break;
            };
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("exit") {
                break;
            }
            let _ = rl.add_history_entry(&input);

            match self.session.chat(&mut conversation, &input).await {
                Ok(reply) => {
                    println!("{} {}", "Study Buddy:".bright_blue().bold(), reply);
                }
                Err(e) => println!("{} {}", "Error:".red(), e),
            }
        }
        Ok(())
    }

    /// Tracking sub-loop; returns to the menu on 'done' with the
    /// achievement screen
    fn track(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        if let Err(e) = self.session.begin_tracking() {
            println!("{} {}", "Error:".red(), e);
            return Ok(());
        }

        loop {
            self.print_checklist();
            let Some(input) = Self::prompt(rl, "\nMark task(s) (e.g., '1 3 5') or 'done': ")?
            else {
                break;
            };
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("done") {
                break;
            }

            let indices = match ProgressTracker::parse_selection(&input) {
                Ok(indices) => indices,
                Err(e) => {
                    println!("{} {}", "Error:".red(), e);
                    continue;
                }
            };

            match self.session.mark_tasks(&indices) {
                Ok(report) => {
                    for index in &report.invalid {
                        println!("{} Invalid task number: {}", "?".yellow(), index);
                    }
                }
                Err(e) => println!("{} {}", "Error:".red(), e),
            }
        }

        self.print_achievements();
        Ok(())
    }

    fn print_checklist(&self) {
        let Some(tracker) = self.session.tracker() else {
            return;
        };

        println!();
        println!("{}", "Your Tasks:".bright_cyan());
        for (i, task) in tracker.tasks().iter().enumerate() {
            let index = i + 1;
            let mark = if tracker.is_done(index) {
                "x".green().to_string()
            } else {
                " ".to_string()
            };
            println!("{:3}. [{}] {}", index, mark, task);
        }
        println!(
            "{} {}/{} complete",
            "Progress:".bold(),
            tracker.completed_count(),
            tracker.total()
        );
    }

    fn print_achievements(&self) {
        let Ok(achievement) = self.session.achievement() else {
            return;
        };

        println!();
        println!("{}", "Achievements Earned:".bold());
        println!(
            "- {}: {}",
            achievement.tier.name().bright_cyan(),
            achievement.tier.flavor()
        );
        println!("{} {}", "Points Earned:".bold(), achievement.points);
        match achievement.next_milestone {
            Some(milestone) => println!(
                "{} Reach {} points (complete {} more tasks)!",
                "Next Milestone:".bold(),
                milestone.target_points,
                milestone.tasks_remaining
            ),
            None => println!("{} You've reached the top!", "Next Milestone:".bold()),
        }
    }

    fn export(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(input) = Self::prompt(rl, "Format (pdf/txt): ")? else {
            return Ok(());
        };
        let Some(format) = ExportFormat::parse(&input) else {
            println!("{} Unknown format: {}", "?".yellow(), input);
            return Ok(());
        };

        match self.session.export_plan(format) {
            Ok(path) => println!(
                "{} Saved as {}",
                "✓".green(),
                path.display().to_string().cyan()
            ),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        Ok(())
    }
}
