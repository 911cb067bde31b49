//! Subcommand implementations.

use anyhow::Result;

use crate::provider::{Gateway, HttpTransport};
use crate::settings::{FileStorage, SettingsStore};
use crate::translation::Orchestrator;

/// Configure command handler.
pub mod configure;

/// History command handlers.
pub mod history;

/// API key management handlers.
pub mod keys;

/// Model catalog handlers.
pub mod models;

/// Provider selection, language swap and session snapshot handlers.
pub mod session;

/// Translation command handler.
pub mod translate;

/// The orchestrator wired to the settings file and the network.
pub type App = Orchestrator<FileStorage, HttpTransport>;

/// Opens the settings document at its default location.
pub fn open_store() -> Result<SettingsStore<FileStorage>> {
    Ok(SettingsStore::open(FileStorage::default_location()?))
}

pub fn open_app() -> Result<App> {
    Ok(Orchestrator::new(
        open_store()?,
        Gateway::new(HttpTransport::new()),
    ))
}
