//! Scraper engine: backend client, background requests and local persistence.
mod client;
mod config;
mod download;
mod engine;
mod history;
mod persist;
mod storage;

pub use client::{ClientSettings, ReqwestScrapeClient, ScrapeApi, ScrapeError};
pub use config::{ConfigStore, API_URL_KEY};
pub use download::{sanitize_filename, write_download};
pub use engine::{EngineEvent, EngineHandle, Notifier};
pub use history::{HistoryError, HistoryStore, HISTORY_KEY, MAX_HISTORY_ITEMS};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
