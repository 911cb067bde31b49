//! Model catalog listing, refresh and selection.

use anyhow::Result;

use super::{open_app, open_store};
use crate::settings::{ProviderId, Settings};
use crate::ui::{ConsoleView, Style};

pub fn list_models(provider: Option<ProviderId>) -> Result<()> {
    let store = open_store()?;
    let provider = provider.unwrap_or(store.settings().provider);
    print_catalog(store.settings(), provider);
    Ok(())
}

/// Replaces the cached catalog with the provider's current model list.
pub async fn refresh_models(provider: Option<ProviderId>) -> Result<()> {
    let mut app = open_app()?;
    let provider = provider.unwrap_or(app.settings().provider);
    let mut view = ConsoleView::new();

    app.refresh_catalog(&mut view, provider).await?;
    print_catalog(app.settings(), provider);

    Ok(())
}

/// Selects a model. Ids missing from the cached catalog are accepted with a warning.
pub fn select_model(provider: ProviderId, model: &str) -> Result<()> {
    let model = model.trim();
    if model.is_empty() {
        anyhow::bail!("Model id cannot be empty");
    }

    let mut store = open_store()?;
    if !store.settings().provider_settings(provider).catalog_contains(model) {
        crate::status!(
            "{} '{model}' is not in the cached {} catalog. Run 'ultima models refresh {provider}' to update it.",
            Style::warning("warning:"),
            provider.label()
        );
    }

    store.update(|s| s.provider_settings_mut(provider).model = model.to_string());
    crate::status!(
        "{} {} will translate with {}",
        Style::success("✓"),
        provider.label(),
        Style::value(model)
    );

    Ok(())
}

fn print_catalog(settings: &Settings, provider: ProviderId) {
    let config = settings.provider_settings(provider);

    println!("{}", Style::header(format!("{} models", provider.label())));
    for option in &config.catalog {
        let marker = if option.id == config.model {
            format!(" {}", Style::selected_marker())
        } else {
            String::new()
        };
        if option.label == option.id {
            println!("  {}{marker}", Style::value(&option.id));
        } else {
            println!(
                "  {}  {}{marker}",
                Style::value(&option.id),
                Style::secondary(&option.label)
            );
        }
    }
}
