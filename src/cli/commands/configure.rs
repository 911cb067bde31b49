//! Configure command handler for editing translation settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use super::open_store;
use crate::settings::{AUTO_LANGUAGE, ModelOption, ProviderId, Settings};
use crate::translation::{SUPPORTED_LANGUAGES, TONE_PRESETS, normalize_tone};
use crate::ui::{Style, cancellable};

const CUSTOM_TONE: &str = "(custom)";

/// Runs the configure command.
///
/// Lets the user pick the provider, its model, the language pair and the
/// tone. Nothing is saved if the flow is cancelled.
pub fn run_configure() -> Result<()> {
    if cancellable(run_configure_inner)?.is_none() {
        crate::status!("{}", Style::secondary("Cancelled, settings unchanged."));
    }
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let mut store = open_store()?;
    print_current(store.settings());

    let current = store.settings().clone();

    let provider = select_provider(current.provider)?;
    let config = current.provider_settings(provider);
    let model = select_model(&config.catalog, &config.model)?;
    let source_lang = select_language("Source language:", &current.source_lang, true)?;
    let target_lang = select_language("Target language:", &current.target_lang, false)?;
    let tone = select_tone(&current.tone)?;

    store.update(|s| {
        s.provider = provider;
        s.provider_settings_mut(provider).model = model;
        s.source_lang = source_lang;
        s.target_lang = target_lang;
        s.tone = tone;
    });

    if config.usable_keys().is_empty() {
        println!();
        println!(
            "{} No API keys for {}. Add one with 'ultima keys add {provider} <KEY>'.",
            Style::warning("warning:"),
            provider.label()
        );
    }

    println!();
    println!(
        "{} Settings saved to {}",
        Style::success("✓"),
        Style::secondary(store.storage().path().display())
    );

    Ok(())
}

fn print_current(settings: &Settings) {
    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("provider"),
        Style::value(settings.provider)
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        Style::value(&settings.active().model)
    );
    println!(
        "  {}      {}",
        Style::label("from"),
        Style::value(&settings.source_lang)
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        Style::value(&settings.target_lang)
    );
    println!("  {}      {}", Style::label("tone"), Style::value(&settings.tone));
    println!();
}

fn select_provider(current: ProviderId) -> Result<ProviderId> {
    let options: Vec<&str> = ProviderId::ALL.iter().map(|p| p.label()).collect();
    let default_index = ProviderId::ALL
        .iter()
        .position(|p| *p == current)
        .unwrap_or(0);

    let selection = Select::new("Provider:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(ProviderId::ALL
        .into_iter()
        .find(|p| p.label() == selection)
        .unwrap_or(current))
}

fn select_model(catalog: &[ModelOption], current: &str) -> Result<String> {
    if catalog.is_empty() {
        let model = Text::new("Model:")
            .with_help_message("Enter the model id")
            .with_default(current)
            .prompt()?;

        let model = model.trim();
        if model.is_empty() {
            bail!("Model id cannot be empty");
        }
        return Ok(model.to_string());
    }

    let options: Vec<String> = catalog.iter().map(format_model).collect();
    let default_index = catalog.iter().position(|m| m.id == current).unwrap_or(0);

    let selection = Select::new("Model:", options.clone())
        .with_help_message("Run 'ultima models refresh' to update this list")
        .with_starting_cursor(default_index)
        .prompt()?;

    let index = options.iter().position(|o| *o == selection).unwrap_or(0);
    Ok(catalog[index].id.clone())
}

fn format_model(option: &ModelOption) -> String {
    if option.label == option.id {
        option.id.clone()
    } else {
        format!("{} - {}", option.id, option.label)
    }
}

fn select_language(message: &str, current: &str, allow_auto: bool) -> Result<String> {
    // Options read "code - Name"; `auto` leads the list for the source side.
    let mut codes: Vec<&str> = Vec::new();
    let mut options: Vec<String> = Vec::new();
    if allow_auto {
        codes.push(AUTO_LANGUAGE);
        options.push(format!("{AUTO_LANGUAGE} - Detect automatically"));
    }
    for (code, name) in SUPPORTED_LANGUAGES {
        codes.push(*code);
        options.push(format!("{code} - {name}"));
    }

    let default_index = codes.iter().position(|c| *c == current).unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let code = selection.split(" - ").next().unwrap_or(&selection);
    Ok(code.to_string())
}

fn select_tone(current: &str) -> Result<String> {
    let mut options: Vec<String> = TONE_PRESETS
        .iter()
        .map(|p| format!("{} - {}", p.key, p.description))
        .collect();
    options.push(CUSTOM_TONE.to_string());

    let default_index = TONE_PRESETS
        .iter()
        .position(|p| p.key == current)
        .unwrap_or(TONE_PRESETS.len());

    let selection = Select::new("Tone:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    if selection != CUSTOM_TONE {
        let key = selection.split(" - ").next().unwrap_or(&selection);
        return Ok(key.to_string());
    }

    let tone = Text::new("Custom tone:")
        .with_help_message("Any short description, e.g. 'playful' or 'legal'")
        .with_default(current)
        .prompt()?;

    normalize_tone(&tone).ok_or_else(|| anyhow::anyhow!("Tone cannot be empty"))
}
