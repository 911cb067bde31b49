//! Durable single-document persistence of settings, history and session snapshot.

mod document;
mod history;
mod model;
mod store;

pub use history::{HISTORY_CAPACITY, History, HistoryEntry};
pub use model::{
    AUTO_LANGUAGE, DEFAULT_GEMINI_MODEL, DEFAULT_OPENROUTER_MODEL, DEFAULT_TARGET_LANGUAGE,
    DEFAULT_TONE, ModelOption, ProviderId, ProviderSettings, Settings,
};
pub use store::{DocumentStorage, FileStorage, MemoryStorage, PersistenceError, SettingsStore};

/// Fixed storage key of the settings document.
pub const STORAGE_KEY: &str = "ultima_data_v3";
