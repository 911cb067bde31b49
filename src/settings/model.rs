use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::history::History;

/// Default Gemini model used until a catalog is fetched.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
/// Default OpenRouter model used until a catalog is fetched.
pub const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-4o-mini";
/// Source language sentinel asking the model to detect the language.
pub const AUTO_LANGUAGE: &str = "auto";
pub const DEFAULT_TARGET_LANGUAGE: &str = "fa";
pub const DEFAULT_TONE: &str = "neutral";

/// One of the two supported translation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    #[default]
    Gemini,
    #[serde(alias = "or")]
    OpenRouter,
}

impl ProviderId {
    pub const ALL: [Self; 2] = [Self::Gemini, Self::OpenRouter];

    /// Identifier used on disk and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenRouter => "openrouter",
        }
    }

    /// Human-readable product name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::OpenRouter => "OpenRouter",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "openrouter" | "or" => Ok(Self::OpenRouter),
            other => Err(format!(
                "Unknown provider '{other}'. Available providers: gemini, openrouter"
            )),
        }
    }
}

/// A selectable model as shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub label: String,
    pub id: String,
}

impl ModelOption {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

/// Per-provider credentials and model selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Key slots in failover order. Blank slots may exist while editing.
    pub keys: Vec<String>,
    /// Selected model id.
    pub model: String,
    /// Cached catalog of available models.
    pub catalog: Vec<ModelOption>,
}

impl ProviderSettings {
    pub fn with_default_model(model: &str) -> Self {
        Self {
            keys: vec![String::new()],
            model: model.to_string(),
            catalog: vec![ModelOption::new(model, model)],
        }
    }

    /// Returns the trimmed, non-blank keys in stored order.
    pub fn usable_keys(&self) -> Vec<String> {
        self.keys
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Key slots with blank entries dropped, as written to disk.
    pub fn persisted_keys(&self) -> Vec<String> {
        self.keys
            .iter()
            .filter(|k| !k.trim().is_empty())
            .cloned()
            .collect()
    }

    pub fn catalog_contains(&self, model: &str) -> bool {
        self.catalog.iter().any(|option| option.id == model)
    }
}

/// All user-configurable state plus the last-interaction snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub provider: ProviderId,
    pub gemini: ProviderSettings,
    pub openrouter: ProviderSettings,
    pub source_lang: String,
    pub target_lang: String,
    pub tone: String,
    pub history: History,
    pub last_source_text: String,
    pub last_result_text: String,
    pub result_visible: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderId::Gemini,
            gemini: ProviderSettings::with_default_model(DEFAULT_GEMINI_MODEL),
            openrouter: ProviderSettings::with_default_model(DEFAULT_OPENROUTER_MODEL),
            source_lang: AUTO_LANGUAGE.to_string(),
            target_lang: DEFAULT_TARGET_LANGUAGE.to_string(),
            tone: DEFAULT_TONE.to_string(),
            history: History::default(),
            last_source_text: String::new(),
            last_result_text: String::new(),
            result_visible: false,
        }
    }
}

impl Settings {
    pub const fn provider_settings(&self, provider: ProviderId) -> &ProviderSettings {
        match provider {
            ProviderId::Gemini => &self.gemini,
            ProviderId::OpenRouter => &self.openrouter,
        }
    }

    pub const fn provider_settings_mut(&mut self, provider: ProviderId) -> &mut ProviderSettings {
        match provider {
            ProviderId::Gemini => &mut self.gemini,
            ProviderId::OpenRouter => &mut self.openrouter,
        }
    }

    /// Settings of the currently active provider.
    pub const fn active(&self) -> &ProviderSettings {
        self.provider_settings(self.provider)
    }
}
