use chrono::Local;
use tracing::{debug, warn};

use super::messages;
use super::prompt::build_prompt;
use super::view::{ResultView, View, render_all};
use crate::provider::{CatalogError, Gateway, GatewayError, Transport};
use crate::settings::{
    AUTO_LANGUAGE, DocumentStorage, HistoryEntry, ModelOption, ProviderId, Settings,
    SettingsStore,
};

/// Plain values gathered from the input controls for one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub source_text: String,
    pub from: String,
    pub to: String,
    pub tone: String,
}

impl TranslateRequest {
    /// Request for `source_text` using the stored language pair and tone.
    pub fn with_settings(source_text: impl Into<String>, settings: &Settings) -> Self {
        Self {
            source_text: source_text.into(),
            from: settings.source_lang.clone(),
            to: settings.target_lang.clone(),
            tone: settings.tone.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("source text is empty")]
    EmptySource,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Drives user actions against the settings store and the provider gateway.
///
/// Every action takes `&mut self`, so a second translation cannot start while
/// one is still pending.
pub struct Orchestrator<S, T> {
    store: SettingsStore<S>,
    gateway: Gateway<T>,
}

impl<S: DocumentStorage, T: Transport> Orchestrator<S, T> {
    pub const fn new(store: SettingsStore<S>, gateway: Gateway<T>) -> Self {
        Self { store, gateway }
    }

    pub const fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut SettingsStore<S> {
        &mut self.store
    }

    pub const fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    pub const fn settings(&self) -> &Settings {
        self.store.settings()
    }

    /// Translates with the active provider and records the exchange.
    ///
    /// Blank input is rejected before any request is made. On success the result
    /// is shown, a history entry is prepended and settings are saved. On failure a
    /// fixed error and notice are shown and nothing is recorded. The view is
    /// returned to idle in both cases.
    pub async fn translate<V: View>(
        &mut self,
        view: &mut V,
        request: &TranslateRequest,
    ) -> Result<HistoryEntry, TranslateError> {
        let source = request.source_text.trim();
        if source.is_empty() {
            view.notify(messages::EMPTY_SOURCE);
            return Err(TranslateError::EmptySource);
        }

        view.set_busy(true);
        let outcome = self.run_translation(view, source, request).await;
        view.set_busy(false);
        outcome
    }

    async fn run_translation<V: View>(
        &mut self,
        view: &mut V,
        source: &str,
        request: &TranslateRequest,
    ) -> Result<HistoryEntry, TranslateError> {
        let prompt = build_prompt(&request.from, &request.to, &request.tone, source);
        let provider = self.store.settings().provider;

        debug!(%provider, from = %request.from, to = %request.to, "translating");

        let translation = match self
            .gateway
            .translate(self.store.settings(), provider, &prompt)
            .await
        {
            Ok(translation) => translation,
            Err(e) => {
                warn!(error = %e, "translation failed");
                view.show_error(messages::TRANSLATION_FAILED);
                view.notify(messages::CONNECTION_FAILED);
                return Err(e.into());
            }
        };

        view.show_result(&ResultView::new(&translation.text, &request.to));

        let entry = self.store.update(|settings| {
            settings.source_lang.clone_from(&request.from);
            settings.target_lang.clone_from(&request.to);
            settings.tone.clone_from(&request.tone);
            settings.last_source_text = source.to_string();
            settings.last_result_text.clone_from(&translation.text);
            settings.result_visible = true;
            settings
                .history
                .record(
                    source,
                    &translation.text,
                    &request.from,
                    &request.to,
                    Local::now(),
                )
                .clone()
        });

        Ok(entry)
    }

    /// Renders the history log, newest first.
    pub fn show_history<V: View>(&self, view: &mut V) {
        view.render_history(&render_all(&self.store.settings().history));
    }

    /// Deletes one history entry and re-renders. Returns `false` for an unknown id.
    pub fn remove_history<V: View>(&mut self, view: &mut V, id: i64) -> bool {
        let removed = self.store.update(|s| s.history.remove(id));
        self.show_history(view);
        removed
    }

    pub fn clear_history<V: View>(&mut self, view: &mut V) {
        self.store.update(|s| s.history.clear());
        self.show_history(view);
    }

    /// Copies a history entry back into the session snapshot and shows it.
    pub fn restore_history<V: View>(&mut self, view: &mut V, id: i64) -> Option<HistoryEntry> {
        let entry = self.store.settings().history.get(id).cloned()?;

        self.store.update(|s| {
            s.last_source_text.clone_from(&entry.source_text);
            s.last_result_text.clone_from(&entry.result_text);
            s.result_visible = true;
        });
        view.show_result(&ResultView::new(&entry.result_text, &entry.to_lang));

        Some(entry)
    }

    /// Swaps the language pair. Refused while the source is `auto`.
    pub fn swap_languages<V: View>(&mut self, view: &mut V) -> bool {
        if self.store.settings().source_lang == AUTO_LANGUAGE {
            view.notify(messages::CANNOT_SWAP_AUTO);
            return false;
        }

        self.store.update(|s| std::mem::swap(&mut s.source_lang, &mut s.target_lang));
        true
    }

    /// Clears the source text and hides the result.
    pub fn clear_source<V: View>(&mut self, view: &mut V) {
        self.store.update(|s| {
            s.last_source_text.clear();
            s.result_visible = false;
        });
        view.notify(messages::TEXT_CLEARED);
    }

    /// Fetches and caches a provider's model catalog.
    ///
    /// The cached catalog is kept when the fetch fails or returns nothing. A
    /// selected model missing from the new catalog falls back to its first entry.
    pub async fn refresh_catalog<V: View>(
        &mut self,
        view: &mut V,
        provider: ProviderId,
    ) -> Result<Vec<ModelOption>, CatalogError> {
        view.notify(messages::FETCHING_MODELS);

        let catalog = match self
            .gateway
            .fetch_catalog(self.store.settings(), provider)
            .await
        {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "model catalog refresh failed");
                view.notify(match e {
                    CatalogError::NoKeys(_) => messages::MISSING_API_KEY,
                    CatalogError::Request { .. } => messages::MODELS_FETCH_FAILED,
                });
                return Err(e);
            }
        };

        if !catalog.is_empty() {
            self.store.update(|s| {
                let config = s.provider_settings_mut(provider);
                config.catalog = catalog.clone();
                if !config.catalog_contains(&config.model) {
                    config.model.clone_from(&catalog[0].id);
                }
            });
        }
        view.notify(messages::MODELS_UPDATED);

        Ok(catalog)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::provider::testing::{ScriptedTransport, gemini_body, openrouter_body};
    use crate::settings::MemoryStorage;
    use crate::translation::HistoryItemView;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Busy(bool),
        Result(String),
        Error(String),
        Notice(String),
        History(usize),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<Event>,
    }

    impl View for RecordingView {
        fn set_busy(&mut self, busy: bool) {
            self.events.push(Event::Busy(busy));
        }

        fn show_result(&mut self, result: &ResultView) {
            self.events.push(Event::Result(result.text.clone()));
        }

        fn show_error(&mut self, message: &str) {
            self.events.push(Event::Error(message.to_string()));
        }

        fn notify(&mut self, message: &str) {
            self.events.push(Event::Notice(message.to_string()));
        }

        fn render_history(&mut self, items: &[HistoryItemView]) {
            self.events.push(Event::History(items.len()));
        }
    }

    fn orchestrator(
        provider: ProviderId,
        keys: &[&str],
        transport: ScriptedTransport,
    ) -> Orchestrator<MemoryStorage, ScriptedTransport> {
        let mut store = SettingsStore::new(MemoryStorage::new());
        store.settings_mut().provider = provider;
        store.settings_mut().provider_settings_mut(provider).keys =
            keys.iter().map(ToString::to_string).collect();
        Orchestrator::new(store, Gateway::new(transport))
    }

    fn request(text: &str) -> TranslateRequest {
        TranslateRequest {
            source_text: text.to_string(),
            from: "en".to_string(),
            to: "fa".to_string(),
            tone: "neutral".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_translation_records_history() {
        let transport = ScriptedTransport::new().respond(200, &gemini_body("سلام"));
        let mut app = orchestrator(ProviderId::Gemini, &["valid-key"], transport);
        let earlier = Local::now() - chrono::TimeDelta::hours(1);
        let previous = app
            .store_mut()
            .settings_mut()
            .history
            .record("Good night", "شب بخیر", "en", "fa", earlier)
            .clone();
        let mut view = RecordingView::default();

        let entry = app.translate(&mut view, &request("Hello")).await.unwrap();

        assert_eq!(
            view.events,
            vec![
                Event::Busy(true),
                Event::Result("سلام".to_string()),
                Event::Busy(false),
            ]
        );
        assert_eq!(entry.source_text, "Hello");
        assert_eq!(entry.result_text, "سلام");
        assert_eq!(entry.from_lang, "en");
        assert_eq!(entry.to_lang, "fa");

        let settings = app.settings();
        assert_eq!(settings.history.len(), 2);
        assert_eq!(settings.history.entries()[0], entry);
        assert_eq!(settings.history.entries()[1], previous);
        assert!(entry.id > previous.id);
        assert_eq!(settings.last_source_text, "Hello");
        assert_eq!(settings.last_result_text, "سلام");
        assert!(settings.result_visible);
        assert_eq!(app.store().storage().writes(), 1);

        let body = app.gateway().transport().requests()[0].body.clone().unwrap();
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "Translate this text from \"en\" to \"fa\". Tone: neutral. Output ONLY translation: Hello"
        );
    }

    #[tokio::test]
    async fn test_empty_source_makes_no_request() {
        let mut app = orchestrator(ProviderId::Gemini, &["k"], ScriptedTransport::new());
        let mut view = RecordingView::default();

        let err = app.translate(&mut view, &request("   \n ")).await.unwrap_err();

        assert!(matches!(err, TranslateError::EmptySource));
        assert_eq!(
            view.events,
            vec![Event::Notice(messages::EMPTY_SOURCE.to_string())]
        );
        assert!(app.gateway().transport().requests().is_empty());
        assert_eq!(app.store().storage().writes(), 0);
    }

    #[tokio::test]
    async fn test_failure_shows_error_and_records_nothing() {
        let transport = ScriptedTransport::new().respond(401, "").respond(500, "");
        let mut app = orchestrator(ProviderId::OpenRouter, &["a", "b"], transport);
        let mut view = RecordingView::default();

        let err = app.translate(&mut view, &request("Hello")).await.unwrap_err();

        assert!(matches!(
            err,
            TranslateError::Gateway(GatewayError::AllKeysFailed { .. })
        ));
        assert_eq!(
            view.events,
            vec![
                Event::Busy(true),
                Event::Error(messages::TRANSLATION_FAILED.to_string()),
                Event::Notice(messages::CONNECTION_FAILED.to_string()),
                Event::Busy(false),
            ]
        );
        assert!(app.settings().history.is_empty());
        assert_eq!(app.store().storage().writes(), 0);
    }

    #[tokio::test]
    async fn test_no_keys_restores_idle() {
        let mut app = orchestrator(ProviderId::Gemini, &[""], ScriptedTransport::new());
        let mut view = RecordingView::default();

        let err = app.translate(&mut view, &request("Hello")).await.unwrap_err();

        assert!(matches!(
            err,
            TranslateError::Gateway(GatewayError::NoKeys(ProviderId::Gemini))
        ));
        assert_eq!(view.events.last(), Some(&Event::Busy(false)));
        assert!(app.gateway().transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_openrouter_failover_is_invisible_to_user() {
        let transport = ScriptedTransport::new()
            .respond(401, r#"{"error":{"code":401}}"#)
            .respond(200, &openrouter_body("درود"));
        let mut app = orchestrator(ProviderId::OpenRouter, &["expired", "fresh"], transport);
        let mut view = RecordingView::default();

        let entry = app.translate(&mut view, &request("Hi")).await.unwrap();

        assert_eq!(entry.result_text, "درود");
        assert!(
            !view
                .events
                .iter()
                .any(|e| matches!(e, Event::Error(_) | Event::Notice(_)))
        );
    }

    #[tokio::test]
    async fn test_translation_succeeds_when_save_fails() {
        let store = SettingsStore::new(MemoryStorage::failing());
        let mut app = Orchestrator::new(
            store,
            Gateway::new(ScriptedTransport::new().respond(200, &gemini_body("ok"))),
        );
        app.store_mut().settings_mut().gemini.keys = vec!["k".to_string()];
        let mut view = RecordingView::default();

        let entry = app.translate(&mut view, &request("Hello")).await.unwrap();

        assert_eq!(entry.result_text, "ok");
        assert_eq!(app.settings().history.len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_catalog_caches_result() {
        let body = r#"{"data":[{"id":"meta/llama","name":"Llama"}]}"#;
        let mut app = orchestrator(
            ProviderId::OpenRouter,
            &[],
            ScriptedTransport::new().respond(200, body),
        );
        let mut view = RecordingView::default();

        app.refresh_catalog(&mut view, ProviderId::OpenRouter)
            .await
            .unwrap();

        assert_eq!(
            app.settings().openrouter.catalog,
            vec![ModelOption::new("Llama", "meta/llama")]
        );
        assert_eq!(app.settings().openrouter.model, "meta/llama");
        assert_eq!(
            view.events.last(),
            Some(&Event::Notice(messages::MODELS_UPDATED.to_string()))
        );
    }

    #[tokio::test]
    async fn test_refresh_catalog_failure_keeps_cache() {
        let mut app = orchestrator(
            ProviderId::OpenRouter,
            &[],
            ScriptedTransport::new().respond(502, ""),
        );
        let before = app.settings().openrouter.catalog.clone();
        let mut view = RecordingView::default();

        assert!(
            app.refresh_catalog(&mut view, ProviderId::OpenRouter)
                .await
                .is_err()
        );
        assert_eq!(app.settings().openrouter.catalog, before);
        assert_eq!(
            view.events.last(),
            Some(&Event::Notice(messages::MODELS_FETCH_FAILED.to_string()))
        );
    }

    #[test]
    fn test_swap_languages() {
        let mut app = orchestrator(ProviderId::Gemini, &[], ScriptedTransport::new());
        let mut view = RecordingView::default();

        assert!(!app.swap_languages(&mut view));
        assert_eq!(
            view.events,
            vec![Event::Notice(messages::CANNOT_SWAP_AUTO.to_string())]
        );

        app.store_mut().settings_mut().source_lang = "en".to_string();
        assert!(app.swap_languages(&mut view));
        assert_eq!(app.settings().source_lang, "fa");
        assert_eq!(app.settings().target_lang, "en");
    }

    #[test]
    fn test_history_operations() {
        let mut app = orchestrator(ProviderId::Gemini, &[], ScriptedTransport::new());
        let now = Local::now();
        let history = &mut app.store_mut().settings_mut().history;
        let first = history.record("one", "1", "en", "fa", now).id;
        let second = history.record("two", "2", "en", "fa", now).id;
        let mut view = RecordingView::default();

        let restored = app.restore_history(&mut view, first).unwrap();
        assert_eq!(restored.source_text, "one");
        assert_eq!(app.settings().last_result_text, "1");
        assert!(app.settings().result_visible);

        assert!(app.remove_history(&mut view, second));
        assert!(!app.remove_history(&mut view, second));
        assert_eq!(app.settings().history.len(), 1);

        app.clear_history(&mut view);
        assert!(app.settings().history.is_empty());
        assert_eq!(view.events.last(), Some(&Event::History(0)));
    }

    #[test]
    fn test_clear_source() {
        let mut app = orchestrator(ProviderId::Gemini, &[], ScriptedTransport::new());
        app.store_mut().settings_mut().last_source_text = "draft".to_string();
        app.store_mut().settings_mut().result_visible = true;
        let mut view = RecordingView::default();

        app.clear_source(&mut view);

        assert!(app.settings().last_source_text.is_empty());
        assert!(!app.settings().result_visible);
        assert_eq!(app.store().storage().writes(), 1);
    }
}
