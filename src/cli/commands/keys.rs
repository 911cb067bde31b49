//! API key management. Key order is failover priority.

use anyhow::{Result, bail};

use super::open_store;
use crate::cli::KeysCommand;
use crate::provider::mask_key;
use crate::settings::{ProviderId, ProviderSettings, Settings};
use crate::ui::Style;

pub fn run_keys(command: KeysCommand) -> Result<()> {
    let mut store = open_store()?;

    match command {
        KeysCommand::List { provider } => {
            let provider = provider.unwrap_or(store.settings().provider);
            print_keys(store.settings(), provider);
        }
        KeysCommand::Add { provider, key } => {
            let key = key.trim().to_string();
            if key.is_empty() {
                bail!("API key cannot be empty");
            }

            let position = store.update(|s| add_key(s.provider_settings_mut(provider), &key));
            crate::status!(
                "{} Added key #{position} {} for {}",
                Style::success("✓"),
                Style::value(mask_key(&key)),
                provider.label()
            );
        }
        KeysCommand::Remove { provider, index } => {
            let Some(removed) = store.update(|s| remove_key(s.provider_settings_mut(provider), index))
            else {
                bail!(
                    "No key #{index} for {}.\n\n\
                     Run 'ultima keys list {provider}' to see configured keys.",
                    provider.label()
                );
            };
            crate::status!(
                "{} Removed key {} from {}",
                Style::success("✓"),
                Style::value(mask_key(&removed)),
                provider.label()
            );
        }
    }

    Ok(())
}

/// Appends a key after the existing ones, dropping blank slots.
///
/// Returns the key's one-based position.
fn add_key(config: &mut ProviderSettings, key: &str) -> usize {
    config.keys.retain(|k| !k.trim().is_empty());
    config.keys.push(key.to_string());
    config.keys.len()
}

/// Removes the key at a one-based position among the non-blank keys.
fn remove_key(config: &mut ProviderSettings, index: usize) -> Option<String> {
    config.keys.retain(|k| !k.trim().is_empty());
    if index == 0 || index > config.keys.len() {
        return None;
    }
    Some(config.keys.remove(index - 1))
}

fn print_keys(settings: &Settings, provider: ProviderId) {
    let config = settings.provider_settings(provider);
    let keys = config.usable_keys();
    let active = settings.provider == provider;

    println!(
        "{}{}",
        Style::header(format!("{} keys", provider.label())),
        if active {
            format!(" {}", Style::secondary("(active)"))
        } else {
            String::new()
        }
    );

    if keys.is_empty() {
        println!("  {}", Style::secondary("(none)"));
        println!();
        println!("Add one with 'ultima keys add {provider} <KEY>'.");
        return;
    }

    for (i, key) in keys.iter().enumerate() {
        println!("  {}  {}", Style::label(format!("#{}", i + 1)), mask_key(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_GEMINI_MODEL;

    #[test]
    fn test_add_key_replaces_blank_slot() {
        let mut config = ProviderSettings::with_default_model(DEFAULT_GEMINI_MODEL);
        assert_eq!(config.keys, vec![String::new()]);

        assert_eq!(add_key(&mut config, "first"), 1);
        assert_eq!(add_key(&mut config, "second"), 2);
        assert_eq!(config.keys, vec!["first", "second"]);
    }

    #[test]
    fn test_remove_key_is_one_based() {
        let mut config = ProviderSettings::with_default_model(DEFAULT_GEMINI_MODEL);
        config.keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        assert_eq!(remove_key(&mut config, 2), Some("b".to_string()));
        assert_eq!(config.keys, vec!["a", "c"]);
        assert_eq!(remove_key(&mut config, 0), None);
        assert_eq!(remove_key(&mut config, 3), None);
        assert_eq!(config.keys.len(), 2);
    }
}
