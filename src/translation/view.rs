//! Presentation boundary: the sink the orchestrator drives and the pure
//! view models it renders from history.

use super::language::is_rtl;
use crate::settings::{History, HistoryEntry};

/// Maximum number of characters of source text shown in a history row.
const PREVIEW_CHARS: usize = 80;

/// Surface the orchestrator reports to.
pub trait View {
    /// Disables the trigger and shows progress, or restores the idle state.
    fn set_busy(&mut self, busy: bool);
    fn show_result(&mut self, result: &ResultView);
    /// Shows an error in place of the result.
    fn show_error(&mut self, message: &str);
    /// Shows a transient notice.
    fn notify(&mut self, message: &str);
    fn render_history(&mut self, items: &[HistoryItemView]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub text: String,
    pub rtl: bool,
}

impl ResultView {
    pub fn new(text: &str, target_lang: &str) -> Self {
        Self {
            text: text.to_string(),
            rtl: is_rtl(target_lang),
        }
    }
}

/// One history row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItemView {
    pub id: i64,
    /// `from > to`, e.g. `en > fa`.
    pub direction: String,
    pub created_at: String,
    /// Source text cut to a single short line.
    pub source_preview: String,
    pub result: String,
    pub rtl: bool,
}

pub fn render(entry: &HistoryEntry) -> HistoryItemView {
    HistoryItemView {
        id: entry.id,
        direction: format!("{} > {}", entry.from_lang, entry.to_lang),
        created_at: entry.created_at.clone(),
        source_preview: preview(&entry.source_text),
        result: entry.result_text.clone(),
        rtl: is_rtl(&entry.to_lang),
    }
}

pub fn render_all(history: &History) -> Vec<HistoryItemView> {
    history.iter().map(render).collect()
}

fn preview(text: &str) -> String {
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() <= PREVIEW_CHARS {
        return line;
    }
    let cut: String = line.chars().take(PREVIEW_CHARS - 1).collect();
    format!("{cut}…")
}
