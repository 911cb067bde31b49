//! Terminal implementation of the orchestrator's view.

use super::{Spinner, Style};
use crate::translation::{HistoryItemView, ResultView, View, messages};

/// Prints results to stdout and everything else to stderr.
#[derive(Default)]
pub struct ConsoleView {
    spinner: Option<Spinner>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for ConsoleView {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            self.spinner = Some(Spinner::new(messages::TRANSLATING));
        } else if let Some(spinner) = self.spinner.take() {
            spinner.stop();
        }
    }

    fn show_result(&mut self, result: &ResultView) {
        println!("{}", result.text);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{}", Style::error(message));
    }

    fn notify(&mut self, message: &str) {
        crate::status!("{}", Style::secondary(message));
    }

    fn render_history(&mut self, items: &[HistoryItemView]) {
        if items.is_empty() {
            println!("{}", Style::secondary("No translations yet."));
            return;
        }

        for item in items {
            println!(
                "{}  {}  {}",
                Style::value(item.id),
                Style::code(&item.direction),
                Style::secondary(&item.created_at)
            );
            println!("  {}", Style::secondary(&item.source_preview));
            println!("  {}", Style::header(&item.result));
            println!();
        }
    }
}
