//! TUI rendering traits for dday types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to dday-core types using owo_colors.

use dday_core::progress::YearProgress;
use dday_core::session::{Row, RowStatus};
use dday_core::Event;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Row {
    fn render(&self) -> String {
        // Pad before coloring so escape codes don't count towards the width
        let label = format!("{:>8}", self.label);
        let label = match self.status {
            RowStatus::Today => label.green().bold().to_string(),
            RowStatus::Upcoming => label,
            RowStatus::Past | RowStatus::Invalid => label.red().to_string(),
        };

        let date = match self.status {
            RowStatus::Invalid => self.date.red().to_string(),
            _ => self.date.dimmed().to_string(),
        };

        let marker = if self.selected { ">" } else { " " };
        let id = format!("{:>3}", self.id.0);

        format!("{}{} {}  {}  {}", marker, id.dimmed(), label, date, self.name)
    }
}

impl Render for Event {
    fn render(&self) -> String {
        format!("{} {}", self.name, format!("({})", self.date).dimmed())
    }
}

impl Render for YearProgress {
    fn render(&self) -> String {
        format!(
            "Your {} is {}",
            self.year,
            format!("{}% gone", self.percent_label()).red().bold()
        )
    }
}

/// Text progress bar, `width` cells wide.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
