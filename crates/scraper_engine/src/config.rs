use std::sync::Arc;

use engine_logging::engine_warn;
use scraper_core::strip_trailing_slash;

use crate::storage::KeyValueStore;

/// Storage key holding the user-saved API base URL.
pub const API_URL_KEY: &str = "api_base_url";

/// API base URL setting.
///
/// A non-empty default (baked in at build time or taken from the
/// environment) always wins over the saved value. Reads and writes never
/// fail: storage problems are logged and reads fall back to `""`, which
/// callers treat as "not configured".
#[derive(Clone)]
pub struct ConfigStore {
    store: Arc<dyn KeyValueStore>,
    default_url: Option<String>,
}

impl ConfigStore {
    pub fn new(store: Arc<dyn KeyValueStore>, default_url: Option<String>) -> Self {
        Self {
            store,
            default_url: default_url.filter(|url| !url.is_empty()),
        }
    }

    pub fn get(&self) -> String {
        if let Some(url) = &self.default_url {
            return strip_trailing_slash(url).to_string();
        }
        match self.store.get(API_URL_KEY) {
            Ok(stored) => strip_trailing_slash(&stored.unwrap_or_default()).to_string(),
            Err(err) => {
                engine_warn!("Failed to read API URL from storage: {}", err);
                String::new()
            }
        }
    }

    pub fn set(&self, url: &str) {
        if let Err(err) = self.store.set(API_URL_KEY, strip_trailing_slash(url)) {
            engine_warn!("Failed to save API URL: {}", err);
        }
    }

    pub fn has_default(&self) -> bool {
        self.default_url.is_some()
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("default_url", &self.default_url)
            .finish_non_exhaustive()
    }
}
