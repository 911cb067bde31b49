//! Commands acting on the active provider, language pair and last translation.

use anyhow::Result;

use super::{open_app, open_store};
use crate::settings::{ProviderId, Settings};
use crate::translation::{get_preset, language_name};
use crate::ui::{ConsoleView, Style};

/// Makes `provider` the one used for translation.
pub fn use_provider(provider: ProviderId) -> Result<()> {
    let mut store = open_store()?;
    store.update(|s| s.provider = provider);

    let config = store.settings().active();
    crate::status!(
        "{} Using {} ({})",
        Style::success("✓"),
        Style::value(provider.label()),
        config.model
    );
    if config.usable_keys().is_empty() {
        crate::status!(
            "{} No API keys for {}. Add one with 'ultima keys add {provider} <KEY>'.",
            Style::warning("warning:"),
            provider.label()
        );
    }

    Ok(())
}

pub fn swap() -> Result<()> {
    let mut app = open_app()?;
    let mut view = ConsoleView::new();

    if app.swap_languages(&mut view) {
        let settings = app.settings();
        crate::status!(
            "{} > {}",
            Style::code(&settings.source_lang),
            Style::code(&settings.target_lang)
        );
    }

    Ok(())
}

pub fn clear() -> Result<()> {
    let mut app = open_app()?;
    app.clear_source(&mut ConsoleView::new());
    Ok(())
}

/// Prints the current settings and the last translation, if one is shown.
pub fn show() -> Result<()> {
    let store = open_store()?;
    print_settings(store.settings());
    Ok(())
}

fn print_settings(settings: &Settings) {
    let active = settings.active();

    println!("{}", Style::header("Settings"));
    println!(
        "  {}  {}",
        Style::label("provider"),
        Style::value(settings.provider.label())
    );
    println!("  {}     {}", Style::label("model"), Style::value(&active.model));
    println!(
        "  {}      {}",
        Style::label("keys"),
        Style::value(active.usable_keys().len())
    );
    println!(
        "  {}      {}",
        Style::label("from"),
        describe_language(&settings.source_lang)
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        describe_language(&settings.target_lang)
    );
    println!("  {}      {}", Style::label("tone"), describe_tone(&settings.tone));
    println!(
        "  {}   {}",
        Style::label("history"),
        Style::value(settings.history.len())
    );

    if settings.result_visible {
        println!();
        println!("{}", Style::header("Last translation"));
        println!("  {}", Style::secondary(&settings.last_source_text));
        println!("  {}", settings.last_result_text);
    }
}

fn describe_language(code: &str) -> String {
    language_name(code).map_or_else(
        || Style::code(code),
        |name| format!("{} {}", Style::code(code), Style::secondary(format!("({name})"))),
    )
}

/// Tone value, followed by the preset description when it names a preset.
fn describe_tone(tone: &str) -> String {
    get_preset(tone).map_or_else(
        || Style::value(tone),
        |preset| {
            format!(
                "{} {}",
                Style::value(tone),
                Style::secondary(format!("({})", preset.description))
            )
        },
    )
}
