//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! returns plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output::is_no_color;

/// Styles for different semantic elements.
pub struct Style;

fn paint<T: Display>(text: T, styled: impl FnOnce(&T) -> String) -> String {
    if is_no_color() {
        text.to_string()
    } else {
        styled(&text)
    }
}

impl Style {
    /// Style for section headers (e.g., "Settings", "History")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| t.bold().to_string())
    }

    /// Style for labels/keys (e.g., "provider", "model")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    /// Style for primary values (e.g., provider names, model ids)
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., timestamps, labels)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t| t.red().bold().to_string())
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }

    /// Style for the selected-item marker
    pub fn selected_marker() -> String {
        paint("(selected)", |t| t.dimmed().to_string())
    }
}
