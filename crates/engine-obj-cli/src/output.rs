//! Output formatting for the CLI.

use colored::Colorize;
use serde::Serialize;

use crate::OutputFormat;

/// Where command results go: colored text for people, JSON for scripts.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Print a command result. Text mode leaves rendering to the caller.
    pub fn print<T: Serialize>(&self, value: &T) {
        if self.quiet || self.is_text() {
            return;
        }
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} failed to serialize result: {}", "error:".red().bold(), e),
        }
    }

    pub fn success(&self, msg: &str) {
        if !self.quiet && self.is_text() {
            println!("{} {}", "✓".green().bold(), msg);
        }
    }

    pub fn info(&self, msg: &str) {
        if !self.quiet && self.is_text() {
            println!("{}", msg);
        }
    }

    pub fn warning(&self, msg: &str) {
        if !self.quiet && self.is_text() {
            eprintln!("{} {}", "⚠".yellow().bold(), msg);
        }
    }

    /// Errors are shown even when quiet.
    pub fn error(&self, msg: &str) {
        if self.is_text() {
            eprintln!("{} {}", "✗".red().bold(), msg);
        }
    }
}
