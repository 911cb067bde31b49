use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::PathBuf;

use super::document;
use super::model::Settings;
use crate::fs::atomic_write;

/// Failure to read or write the settings document.
///
/// Never surfaced to the user; the store logs it and carries on.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to read settings document {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write settings document {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("settings storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable slot holding one serialized settings document.
pub trait DocumentStorage {
    /// Returns the stored document, or `None` if nothing has been saved yet.
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Replaces the stored document.
    fn write(&self, document: &str) -> Result<(), PersistenceError>;
}

/// Stores the document as a JSON file, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at the default location under the XDG config directory.
    pub fn default_location() -> anyhow::Result<Self> {
        Ok(Self::new(crate::paths::settings_file()?))
    }

    pub const fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl DocumentStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&self, document: &str) -> Result<(), PersistenceError> {
        atomic_write(&self.path, document).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory document slot, useful for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: RefCell<Option<String>>,
    writes: Cell<usize>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a raw document.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
            ..Self::default()
        }
    }

    /// Storage whose writes always fail, as a full quota would.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Number of successful writes so far.
    pub const fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl DocumentStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.document.borrow().clone())
    }

    fn write(&self, document: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable("quota exceeded".to_string()));
        }
        *self.document.borrow_mut() = Some(document.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Owns the in-memory [`Settings`] and persists them as one document.
pub struct SettingsStore<S> {
    storage: S,
    settings: Settings,
}

impl<S: DocumentStorage> SettingsStore<S> {
    /// Creates a store holding default settings. Call [`Self::load`] to restore.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            settings: Settings::default(),
        }
    }

    /// Creates a store and restores the persisted document.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Restores settings from storage.
    ///
    /// A missing document yields the defaults. Unreadable or malformed content
    /// degrades field by field and is logged, never returned as an error.
    pub fn load(&mut self) -> &Settings {
        self.settings = match self.storage.read() {
            Ok(Some(raw)) => document::restore(&raw),
            Ok(None) => {
                tracing::debug!("no settings document found, using defaults");
                Settings::default()
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load settings, using defaults");
                Settings::default()
            }
        };
        &self.settings
    }

    /// Writes the current settings, logging instead of returning any failure.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            tracing::error!(error = %e, "failed to save settings");
        }
    }

    /// Writes the current settings and reports failure to the caller.
    pub fn try_save(&self) -> Result<(), PersistenceError> {
        let raw = document::serialize(&self.settings)?;
        self.storage.write(&raw)?;
        tracing::debug!(bytes = raw.len(), "settings saved");
        Ok(())
    }

    /// Applies a mutation and saves immediately.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Settings) -> R) -> R {
        let result = f(&mut self.settings);
        self.save();
        result
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
