use anyhow::{Result, bail};
use std::path::PathBuf;

use super::open_app;
use crate::input::{InputReader, SourceInput};
use crate::settings::ProviderId;
use crate::translation::{
    TranslateRequest, normalize_tone, validate_language, validate_source_language,
};
use crate::ui::ConsoleView;

/// Per-invocation overrides taken from the command line.
#[derive(Debug, Default)]
pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub text: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub tone: Option<String>,
    pub provider: Option<ProviderId>,
}

impl TranslateOptions {
    /// Rejects unknown language codes and blank tones before anything is read.
    pub fn validate(&self) -> Result<()> {
        if let Some(from) = &self.from {
            validate_source_language(from)?;
        }
        if let Some(to) = &self.to {
            validate_language(to)?;
        }
        if let Some(tone) = &self.tone
            && normalize_tone(tone).is_none()
        {
            bail!("Tone cannot be empty");
        }
        Ok(())
    }
}

/// Translates the source text with the active (or overridden) provider.
///
/// Overrides are applied to the stored settings and persisted together with
/// the history entry when the translation succeeds.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    options.validate()?;

    let source = SourceInput::from_args(options.text.as_deref(), options.file.as_deref());
    let source_text = InputReader::read(&source)?;

    let mut app = open_app()?;
    if let Some(provider) = options.provider {
        app.store_mut().settings_mut().provider = provider;
    }

    let settings = app.settings();
    let request = TranslateRequest {
        source_text,
        from: options.from.unwrap_or_else(|| settings.source_lang.clone()),
        to: options.to.unwrap_or_else(|| settings.target_lang.clone()),
        tone: options
            .tone
            .as_deref()
            .and_then(normalize_tone)
            .unwrap_or_else(|| settings.tone.clone()),
    };

    let mut view = ConsoleView::new();
    app.translate(&mut view, &request).await?;

    Ok(())
}
