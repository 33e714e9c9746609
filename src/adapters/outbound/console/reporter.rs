use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::path::Path;

use crate::domain::{Project, SupportLevel};
use crate::ports::outbound::ExportReporter;

/// ConsoleReporter adapter for human-readable console feedback
///
/// Classification lines go to stdout (they are the `projects`
/// command's whole output); progress and warnings go to stderr so
/// they never mix with data. Uses indicatif for the batch-export
/// progress bar and owo-colors for the per-project lines.
pub struct ConsoleReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportReporter for ConsoleReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_project(&self, project: &Project, level: SupportLevel) {
        let line = format!("{}  {}  {}", project.name, project.project_type, project.id);
        match level {
            SupportLevel::Supported => println!("{}", line.green()),
            SupportLevel::Unsupported => println!("{}", line.red()),
            SupportLevel::Unrecognized => {
                // Routed to the "unsupported" display path, but labeled
                // so a new platform type never goes unnoticed.
                println!("{} {}", line.red(), "(unrecognized type)".yellow());
            }
        }
    }

    fn report_warning(&self, message: &str) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.suspend(|| eprintln!("{}  {}", "⚠️".yellow(), message));
        } else {
            eprintln!("{}  {}", "⚠️".yellow(), message);
        }
    }

    fn report_directory(&self, path: &Path) {
        println!("{}", path.display().cyan());
    }

    fn start_progress(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}",
                )
                .expect("Failed to set progress bar template")
                .progress_chars("=>-"),
        );
        *self.progress_bar.borrow_mut() = Some(pb);
    }

    fn advance_progress(&self, message: &str) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.set_message(message.to_string());
            pb.inc(1);
        }
    }

    fn finish_progress(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}
