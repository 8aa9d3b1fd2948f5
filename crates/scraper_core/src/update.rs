use crate::export::{json_export, text_export};
use crate::filename::{history_json_filename, text_export_filename, DEFAULT_JSON_FILENAME};
use crate::json_text::pretty_json;
use crate::{AppState, Effect, Msg, View};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Tick { elapsed_ms } => {
            state.advance_clock(elapsed_ms);
            Vec::new()
        }
        Msg::GetStartedClicked => {
            if state.view_state() == View::Landing {
                state.set_view(View::Scraper);
            }
            Vec::new()
        }
        Msg::BackClicked => {
            if state.view_state() == View::Scraper {
                state.set_view(View::Landing);
            }
            Vec::new()
        }
        Msg::UrlInputChanged(input) => {
            state.set_url_input(input);
            Vec::new()
        }
        Msg::UrlInputBlurred => {
            state.touch_url();
            Vec::new()
        }
        Msg::ScrapeSubmitted => {
            state.touch_url();
            match state.submittable_url() {
                Some(url) => {
                    let request_id = state.begin_scrape();
                    vec![Effect::Scrape { request_id, url }]
                }
                None => Vec::new(),
            }
        }
        Msg::ScrapeSucceeded {
            request_id,
            response,
        } => {
            if state.settle_request(request_id) {
                state.apply_success(response.clone());
                vec![Effect::RecordHistory(response)]
            } else {
                Vec::new()
            }
        }
        Msg::ScrapeFailed {
            request_id,
            message,
        } => {
            if state.settle_request(request_id) {
                state.apply_failure(message);
            }
            Vec::new()
        }
        Msg::ErrorDismissed => {
            state.reset_scrape();
            Vec::new()
        }
        Msg::ApiUrlLoaded(current) | Msg::ApiUrlInputChanged(current) => {
            state.set_api_url_input(current);
            Vec::new()
        }
        Msg::ApiUrlInputBlurred => {
            state.touch_api_url();
            Vec::new()
        }
        Msg::ApiUrlSaveClicked => {
            state.touch_api_url();
            match state.savable_api_url() {
                Some(url) => {
                    state.show_toast("API URL saved", "You can now retry scraping.");
                    vec![Effect::SaveApiUrl(url)]
                }
                None => Vec::new(),
            }
        }
        Msg::HistoryLoaded(items) => {
            state.set_history(items);
            Vec::new()
        }
        Msg::HistoryToggled => {
            let visible = state.history_visible();
            state.set_history_visible(!visible);
            Vec::new()
        }
        Msg::HistoryClosed => {
            state.set_history_visible(false);
            Vec::new()
        }
        Msg::HistorySearchChanged(query) => {
            state.set_history_query(query);
            Vec::new()
        }
        Msg::HistorySelected { id } => {
            state.select_history(&id);
            Vec::new()
        }
        Msg::HistoryRemoveClicked { id } => vec![Effect::RemoveHistory { id }],
        Msg::HistoryClearClicked => vec![Effect::ClearHistory],
        Msg::HistoryDownloadClicked { id } => state
            .find_history(&id)
            .map(|item| Effect::Download {
                filename: history_json_filename(&item.url),
                contents: json_export(&item.response),
            })
            .into_iter()
            .collect(),
        Msg::SavedResultCleared => {
            state.reset_scrape();
            state.clear_selection();
            Vec::new()
        }
        Msg::ResultTabSelected(tab) => {
            state.set_result_tab(tab);
            Vec::new()
        }
        Msg::TreeNodeToggled { path } => {
            if state.current_result().is_some() {
                state.toggle_tree_node(path);
            }
            Vec::new()
        }
        Msg::CopyJsonClicked => match state.current_result() {
            Some(response) => {
                let text = pretty_json(response.as_value());
                state.mark_copied();
                vec![Effect::CopyToClipboard(text)]
            }
            None => Vec::new(),
        },
        Msg::DownloadJsonClicked => state
            .current_result()
            .map(|response| Effect::Download {
                filename: DEFAULT_JSON_FILENAME.to_string(),
                contents: json_export(response),
            })
            .into_iter()
            .collect(),
        Msg::DownloadTextClicked => state
            .current_result()
            .and_then(|response| response.result())
            .map(|result| Effect::Download {
                filename: text_export_filename(&result.url),
                contents: text_export(&result),
            })
            .into_iter()
            .collect(),
        Msg::DownloadSaved { path } => {
            state.show_toast("Download saved", path);
            Vec::new()
        }
        Msg::DownloadFailed { message } => {
            state.show_toast("Download failed", message);
            Vec::new()
        }
    };

    (state, effects)
}
