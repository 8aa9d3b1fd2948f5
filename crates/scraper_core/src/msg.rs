use crate::model::{HistoryItem, RequestId, ScrapeResponse};
use crate::state::ResultTab;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Frame clock; drives the intro animation and timed notices.
    Tick { elapsed_ms: u64 },
    /// User left the landing page for the scraper.
    GetStartedClicked,
    /// User went back from the scraper to the landing page.
    BackClicked,
    /// User edited the URL input box.
    UrlInputChanged(String),
    /// URL input lost focus.
    UrlInputBlurred,
    /// User submitted the URL form.
    ScrapeSubmitted,
    /// Engine finished a scrape.
    ScrapeSucceeded {
        request_id: RequestId,
        response: ScrapeResponse,
    },
    /// Engine gave up on a scrape.
    ScrapeFailed {
        request_id: RequestId,
        message: String,
    },
    /// User closed the error banner.
    ErrorDismissed,
    /// Current configured base URL, used to prefill the prompt.
    ApiUrlLoaded(String),
    ApiUrlInputChanged(String),
    ApiUrlInputBlurred,
    ApiUrlSaveClicked,
    /// Fresh copy of the persisted history, sent after every store change.
    HistoryLoaded(Vec<HistoryItem>),
    HistoryToggled,
    HistoryClosed,
    HistorySearchChanged(String),
    HistorySelected { id: String },
    HistoryRemoveClicked { id: String },
    HistoryDownloadClicked { id: String },
    HistoryClearClicked,
    /// "Clear" on the saved-result notice.
    SavedResultCleared,
    ResultTabSelected(ResultTab),
    /// User expanded or collapsed a JSON tree node.
    TreeNodeToggled { path: String },
    CopyJsonClicked,
    DownloadJsonClicked,
    DownloadTextClicked,
    /// A download effect finished writing.
    DownloadSaved { path: String },
    DownloadFailed { message: String },
}
