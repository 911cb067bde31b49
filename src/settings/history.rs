//! Translation history log.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the log.
pub const HISTORY_CAPACITY: usize = 50;

/// One completed translation exchange. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Creation timestamp in milliseconds; unique within the log.
    pub id: i64,
    #[serde(alias = "src")]
    pub source_text: String,
    #[serde(alias = "res")]
    pub result_text: String,
    #[serde(alias = "from")]
    pub from_lang: String,
    #[serde(alias = "to")]
    pub to_lang: String,
    /// Display-formatted creation time.
    #[serde(alias = "date", default)]
    pub created_at: String,
}

/// Newest-first, capacity-bounded list of history entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Builds a log from stored entries, keeping at most [`HISTORY_CAPACITY`] of them.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Records a new exchange at the front of the log and returns it.
    ///
    /// The id is the creation time in milliseconds, bumped past the current
    /// newest id when two entries land in the same millisecond.
    pub fn record(
        &mut self,
        source_text: &str,
        result_text: &str,
        from_lang: &str,
        to_lang: &str,
        now: DateTime<Local>,
    ) -> &HistoryEntry {
        let mut id = now.timestamp_millis();
        if let Some(newest) = self.entries.first()
            && id <= newest.id
        {
            id = newest.id + 1;
        }

        self.push(HistoryEntry {
            id,
            source_text: source_text.to_string(),
            result_text: result_text.to_string(),
            from_lang: from_lang.to_string(),
            to_lang: to_lang.to_string(),
            created_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        });

        &self.entries[0]
    }

    /// Prepends an entry, evicting the oldest one beyond capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Removes the entry with the given id. Returns `false` if none matched.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            source_text: format!("source {id}"),
            result_text: format!("result {id}"),
            from_lang: "en".to_string(),
            to_lang: "fa".to_string(),
            created_at: String::new(),
        }
    }

    fn at(millis: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_push_prepends() {
        let mut history = History::default();
        history.push(entry(1));
        history.push(entry(2));

        let ids: Vec<_> = history.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_51st_entry_evicts_the_oldest() {
        let mut history = History::default();
        for id in 1..=50 {
            history.push(entry(id));
        }
        assert_eq!(history.len(), 50);

        history.push(entry(51));

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].id, 51);
        assert!(history.get(1).is_none());
        assert!(history.get(2).is_some());
    }

    #[test]
    fn test_record_fills_fields() {
        let mut history = History::default();
        let recorded = history
            .record("Hello", "سلام", "en", "fa", at(1_700_000_000_000))
            .clone();

        assert_eq!(recorded.id, 1_700_000_000_000);
        assert_eq!(recorded.source_text, "Hello");
        assert_eq!(recorded.result_text, "سلام");
        assert_eq!(recorded.from_lang, "en");
        assert_eq!(recorded.to_lang, "fa");
        assert!(!recorded.created_at.is_empty());
        assert_eq!(history.entries()[0], recorded);
    }

    #[test]
    fn test_record_keeps_ids_unique_within_same_millisecond() {
        let mut history = History::default();
        let now = at(1_700_000_000_000);
        history.record("a", "1", "en", "fa", now);
        history.record("b", "2", "en", "fa", now);

        let ids: Vec<_> = history.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1_700_000_000_001, 1_700_000_000_000]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut history = History::from_entries(vec![entry(3), entry(2), entry(1)]);

        assert!(history.remove(2));
        assert!(!history.remove(42));

        let ids: Vec<_> = history.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_clear() {
        let mut history = History::from_entries(vec![entry(2), entry(1)]);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_from_entries_truncates_to_capacity() {
        let entries = (0..60).rev().map(entry).collect();
        let history = History::from_entries(entries);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].id, 59);
    }

    #[test]
    fn test_entry_deserializes_legacy_field_names() {
        let legacy = r#"{"id":1,"src":"Hi","res":"درود","from":"en","to":"fa","date":"12:00"}"#;
        let parsed: HistoryEntry = serde_json::from_str(legacy).unwrap();
        assert_eq!(parsed.source_text, "Hi");
        assert_eq!(parsed.result_text, "درود");
        assert_eq!(parsed.created_at, "12:00");
    }
}
