use crate::model::{RequestId, ScrapeResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// POST the URL to the scrape backend.
    Scrape { request_id: RequestId, url: String },
    /// Prepend a finished scrape to the persisted history.
    RecordHistory(ScrapeResponse),
    RemoveHistory { id: String },
    ClearHistory,
    /// Persist a new API base URL (already normalized).
    SaveApiUrl(String),
    CopyToClipboard(String),
    /// Write `contents` to the downloads directory as `filename`.
    Download { filename: String, contents: String },
}
