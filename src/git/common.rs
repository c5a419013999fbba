//! Common utilities and shared helpers
//!
//! This module contains utilities that are shared across the Pages and
//! publishing workflows, such as output formatting and error text helpers.

use crate::github::PagesTarget;
use colored::*;
use std::process::Output;

/// Logger with consistent formatting
///
/// Each message is prefixed with the `owner/repo` label of the target in
/// cyan/bold for easy identification.
///
/// ## Example
///
/// ```rust,no_run
/// use ghpages::git::Logger;
/// use ghpages::github::PagesTarget;
///
/// let logger = Logger::default();
/// let target = PagesTarget::new("acme", "docs");
/// logger.info(&target, "Starting operation");
/// logger.success(&target, "Operation completed");
/// ```
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, target: &PagesTarget, msg: &str) {
        println!("{} | {}", target.label().cyan().bold(), msg);
    }

    pub fn success(&self, target: &PagesTarget, msg: &str) {
        println!("{} | {}", target.label().cyan().bold(), msg.green());
    }

    pub fn warn(&self, target: &PagesTarget, msg: &str) {
        println!("{} | {}", target.label().cyan().bold(), msg.yellow());
    }
}

/// The most useful text a failed process printed: stderr, or stdout when
/// stderr is empty (e.g. `git commit` with nothing to commit)
pub fn failure_output(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
