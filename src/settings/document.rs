//! On-disk form of the settings document.
//!
//! Writing is strict. Reading restores each field on its own so that a document
//! with a missing or malformed field still yields usable settings.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::history::{History, HistoryEntry};
use super::model::{ModelOption, ProviderId, ProviderSettings, Settings};

/// Placeholder text that must not be restored as a result.
const RESULT_PLACEHOLDER: &str = "...";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsDocument<'a> {
    provider: ProviderId,
    gemini_keys: Vec<String>,
    or_keys: Vec<String>,
    gemini_model: &'a str,
    or_model: &'a str,
    gemini_catalog: &'a [ModelOption],
    or_catalog: &'a [ModelOption],
    source_lang: &'a str,
    target_lang: &'a str,
    tone: &'a str,
    history: &'a History,
    last_source_text: &'a str,
    last_result_text: &'a str,
    result_visible: bool,
}

/// Serializes settings into a single JSON document, dropping blank key slots.
pub fn serialize(settings: &Settings) -> serde_json::Result<String> {
    let document = SettingsDocument {
        provider: settings.provider,
        gemini_keys: settings.gemini.persisted_keys(),
        or_keys: settings.openrouter.persisted_keys(),
        gemini_model: &settings.gemini.model,
        or_model: &settings.openrouter.model,
        gemini_catalog: &settings.gemini.catalog,
        or_catalog: &settings.openrouter.catalog,
        source_lang: &settings.source_lang,
        target_lang: &settings.target_lang,
        tone: &settings.tone,
        history: &settings.history,
        last_source_text: &settings.last_source_text,
        last_result_text: &settings.last_result_text,
        result_visible: settings.result_visible,
    };
    serde_json::to_string(&document)
}

/// Restores settings from a raw document.
///
/// Every field falls back to its default independently. A document that is
/// not a JSON object yields the defaults.
pub fn restore(raw: &str) -> Settings {
    let defaults = Settings::default();

    let map = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::warn!("settings document is not a JSON object, using defaults");
            return defaults;
        }
        Err(e) => {
            tracing::warn!(error = %e, "settings document is not valid JSON, using defaults");
            return defaults;
        }
    };

    let provider = field::<ProviderId>(&map, &["provider"]).unwrap_or(defaults.provider);

    let gemini = restore_provider(
        &map,
        ["geminiKeys", "geminiModel", "geminiCatalog"],
        defaults.gemini,
    );
    let openrouter = restore_provider(&map, ["orKeys", "orModel", "orCatalog"], defaults.openrouter);

    let history = map
        .get("history")
        .and_then(Value::as_array)
        .map(|items| {
            let entries = items
                .iter()
                .filter_map(|item| serde_json::from_value::<HistoryEntry>(item.clone()).ok())
                .collect();
            History::from_entries(entries)
        })
        .unwrap_or_default();

    let last_source_text =
        field::<String>(&map, &["lastSourceText", "sourceText"]).unwrap_or_default();
    let last_result_text = field::<String>(&map, &["lastResultText", "resultText"])
        .filter(|text| text != RESULT_PLACEHOLDER)
        .unwrap_or_default();
    let result_visible = field::<bool>(&map, &["resultVisible", "isResultVisible"])
        .unwrap_or(false)
        && !last_source_text.is_empty();

    Settings {
        provider,
        gemini,
        openrouter,
        source_lang: non_empty_string(&map, "sourceLang").unwrap_or(defaults.source_lang),
        target_lang: non_empty_string(&map, "targetLang").unwrap_or(defaults.target_lang),
        tone: non_empty_string(&map, "tone").unwrap_or(defaults.tone),
        history,
        last_source_text,
        last_result_text,
        result_visible,
    }
}

fn restore_provider(
    map: &Map<String, Value>,
    [keys_field, model_field, catalog_field]: [&str; 3],
    defaults: ProviderSettings,
) -> ProviderSettings {
    let keys = field::<Vec<String>>(map, &[keys_field])
        .filter(|keys| !keys.is_empty())
        .unwrap_or(defaults.keys);
    let model = non_empty_string(map, model_field).unwrap_or(defaults.model);
    let catalog = field::<Vec<ModelOption>>(map, &[catalog_field])
        .filter(|catalog| !catalog.is_empty())
        .unwrap_or(defaults.catalog);

    ProviderSettings {
        keys,
        model,
        catalog,
    }
}

/// Reads the first present field among `names` as `T`, or `None` if absent or malformed.
fn field<T: DeserializeOwned>(map: &Map<String, Value>, names: &[&str]) -> Option<T> {
    let value = names.iter().find_map(|name| map.get(*name))?;
    serde_json::from_value(value.clone()).ok()
}

fn non_empty_string(map: &Map<String, Value>, name: &str) -> Option<String> {
    field::<String>(map, &[name]).filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_drops_blank_keys() {
        let mut settings = Settings::default();
        settings.gemini.keys = vec!["a".to_string(), " ".to_string(), "b".to_string()];

        let raw = serialize(&settings).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["geminiKeys"], serde_json::json!(["a", "b"]));
        assert_eq!(value["orKeys"], serde_json::json!([]));
        assert_eq!(value["provider"], "gemini");
    }

    #[test]
    fn test_restore_garbage_yields_defaults() {
        assert_eq!(restore("not json"), Settings::default());
        assert_eq!(restore("[1,2,3]"), Settings::default());
    }

    #[test]
    fn test_restore_empty_object_yields_defaults() {
        assert_eq!(restore("{}"), Settings::default());
    }

    #[test]
    fn test_restore_defaults_malformed_fields_independently() {
        let raw = r#"{
            "provider": 42,
            "geminiKeys": "not-a-list",
            "orKeys": ["or-key"],
            "targetLang": "de",
            "tone": ["bad"],
            "history": {"oops": true}
        }"#;

        let settings = restore(raw);
        let defaults = Settings::default();

        assert_eq!(settings.provider, ProviderId::Gemini);
        assert_eq!(settings.gemini.keys, defaults.gemini.keys);
        assert_eq!(settings.openrouter.keys, vec!["or-key"]);
        assert_eq!(settings.target_lang, "de");
        assert_eq!(settings.tone, defaults.tone);
        assert!(settings.history.is_empty());
    }

    #[test]
    fn test_restore_skips_malformed_history_entries() {
        let raw = r#"{"history": [
            {"id": 2, "sourceText": "b", "resultText": "B", "fromLang": "en", "toLang": "fa", "createdAt": "x"},
            {"id": "broken"},
            {"id": 1, "src": "a", "res": "A", "from": "en", "to": "fa", "date": "y"}
        ]}"#;

        let settings = restore(raw);
        let ids: Vec<_> = settings.history.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_restore_legacy_document() {
        let raw = r#"{
            "provider": "or",
            "geminiKeys": [],
            "orKeys": ["k1", "k2"],
            "orModel": "meta/llama",
            "sourceText": "Hello",
            "resultText": "سلام",
            "isResultVisible": true
        }"#;

        let settings = restore(raw);

        assert_eq!(settings.provider, ProviderId::OpenRouter);
        assert_eq!(settings.gemini.keys, vec![String::new()]);
        assert_eq!(settings.openrouter.keys, vec!["k1", "k2"]);
        assert_eq!(settings.openrouter.model, "meta/llama");
        assert_eq!(settings.last_source_text, "Hello");
        assert_eq!(settings.last_result_text, "سلام");
        assert!(settings.result_visible);
    }

    #[test]
    fn test_restore_ignores_placeholder_result_and_hides_without_source() {
        let raw = r#"{"lastResultText": "...", "resultVisible": true}"#;

        let settings = restore(raw);

        assert!(settings.last_result_text.is_empty());
        assert!(!settings.result_visible);
    }

    #[test]
    fn test_serialize_then_restore_preserves_state() {
        let mut settings = Settings::default();
        settings.provider = ProviderId::OpenRouter;
        settings.gemini.keys = vec!["g1".to_string(), String::new()];
        settings.openrouter.keys = vec!["o1".to_string(), "o2".to_string()];
        settings.openrouter.model = "anthropic/claude".to_string();
        settings.openrouter.catalog = vec![ModelOption::new("Claude", "anthropic/claude")];
        settings.source_lang = "en".to_string();
        settings.target_lang = "ja".to_string();
        settings.tone = "formal".to_string();
        settings.last_source_text = "Hello".to_string();
        settings.last_result_text = "こんにちは".to_string();
        settings.result_visible = true;

        let restored = restore(&serialize(&settings).unwrap());

        assert_eq!(restored.gemini.keys, vec!["g1"]);
        settings.gemini.keys = vec!["g1".to_string()];
        assert_eq!(restored, settings);
    }
}
