//! Bounded, most-recent-first scrape history persisted under one storage key.

use std::sync::Arc;

use engine_logging::{engine_debug, engine_error, engine_warn};
use scraper_core::{filter_history, HistoryItem, ScrapeResponse};
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

pub const HISTORY_KEY: &str = "scrape-history";
pub const MAX_HISTORY_ITEMS: usize = 20;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("stored history is unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    items: Vec<HistoryItem>,
}

impl HistoryStore {
    /// Starts empty; call [`HistoryStore::load`] to pick up persisted entries.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    /// Replaces the in-memory list with what storage holds.
    ///
    /// Missing or unreadable history leaves the list empty.
    pub fn load(&mut self) -> &[HistoryItem] {
        self.items = match self.read_persisted() {
            Ok(items) => items,
            Err(err) => {
                engine_error!("Failed to load scrape history: {}", err);
                Vec::new()
            }
        };
        engine_debug!("Loaded {} history entries", self.items.len());
        &self.items
    }

    pub fn read_persisted(&self) -> Result<Vec<HistoryItem>, HistoryError> {
        match self.store.get(HISTORY_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records `response` as the newest entry, evicting beyond the cap.
    pub fn add(&mut self, response: ScrapeResponse) -> &HistoryItem {
        let item = HistoryItem::new(uuid::Uuid::new_v4().to_string(), response);
        self.items.insert(0, item);
        self.items.truncate(MAX_HISTORY_ITEMS);
        self.persist();
        &self.items[0]
    }

    /// Drops the entry with `id`. Unknown ids leave the list as is.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(err) = self.store.remove(HISTORY_KEY) {
            engine_warn!("Failed to clear scrape history: {}", err);
        }
    }

    pub fn filter(&self, query: &str) -> Vec<&HistoryItem> {
        filter_history(&self.items, query)
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.items)
            .map_err(HistoryError::from)
            .and_then(|raw| self.store.set(HISTORY_KEY, &raw).map_err(HistoryError::from));
        if let Err(err) = result {
            engine_error!("Failed to save scrape history: {}", err);
        }
    }
}
