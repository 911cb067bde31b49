use anyhow::{Result, bail};

use super::open_app;
use crate::cli::HistoryCommand;
use crate::ui::{ConsoleView, Style};

pub fn run_history(command: Option<HistoryCommand>) -> Result<()> {
    let mut app = open_app()?;
    let mut view = ConsoleView::new();

    match command.unwrap_or(HistoryCommand::List) {
        HistoryCommand::List => app.show_history(&mut view),
        HistoryCommand::Remove { id } => {
            if !app.remove_history(&mut view, id) {
                crate::status!("{} No history entry with id {id}", Style::warning("warning:"));
            }
        }
        HistoryCommand::Clear => app.clear_history(&mut view),
        HistoryCommand::Restore { id } => {
            if app.restore_history(&mut view, id).is_none() {
                bail!("No history entry with id {id}.\n\nRun 'ultima history' to see entries.");
            }
        }
    }

    Ok(())
}
