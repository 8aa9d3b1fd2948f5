mod common;

use common::{init_logging, request_id_of, response_for, response_from, scraper_state, submit_url};
use pretty_assertions::assert_eq;
use scraper_core::{
    update, AppState, Effect, HistoryItem, Msg, ResultTab, Screen, ScraperView, TreeNode,
    COPIED_INDICATOR_MS,
};
use serde_json::json;

fn scraper_view(state: &AppState) -> ScraperView {
    match state.view().screen {
        Screen::Scraper(view) => *view,
        other => panic!("expected scraper screen, got {other:?}"),
    }
}

fn with_history(state: AppState) -> AppState {
    let items = vec![
        HistoryItem::new("b", response_for("https://www.beta.example.org/x")),
        HistoryItem::new("a", response_for("https://alpha.example.com")),
    ];
    update(state, Msg::HistoryLoaded(items)).0
}

fn scraped(state: AppState, url: &str) -> AppState {
    let (state, effects) = submit_url(state, url);
    let request_id = request_id_of(&effects);
    update(
        state,
        Msg::ScrapeSucceeded {
            request_id,
            response: response_for(url),
        },
    )
    .0
}

#[test]
fn selecting_history_shows_snapshot_and_closes_panel() {
    init_logging();
    let state = with_history(scraper_state());
    let (state, _) = update(state, Msg::HistoryToggled);
    let panel = scraper_view(&state).history_panel.expect("panel open");
    assert_eq!(panel.total, 2);
    assert_eq!(panel.rows[0].id, "b");

    let (state, effects) = update(state, Msg::HistorySelected { id: "a".into() });
    assert!(effects.is_empty());
    let view = scraper_view(&state);
    assert!(view.history_panel.is_none());
    assert!(view.viewing_saved);
    assert_eq!(view.result.unwrap().url, "https://alpha.example.com");
    assert_eq!(view.history_count, 2);
}

#[test]
fn new_scrape_replaces_selected_snapshot() {
    init_logging();
    let state = with_history(scraper_state());
    let (state, _) = update(state, Msg::HistorySelected { id: "a".into() });
    assert!(state.is_viewing_saved());

    let state = scraped(state, "https://fresh.example.com");
    assert!(!state.is_viewing_saved());
    assert_eq!(
        scraper_view(&state).result.unwrap().url,
        "https://fresh.example.com"
    );
}

#[test]
fn clearing_saved_result_returns_to_idle() {
    init_logging();
    let state = with_history(scraper_state());
    let (state, _) = update(state, Msg::HistorySelected { id: "b".into() });
    let (state, _) = update(state, Msg::SavedResultCleared);
    let view = scraper_view(&state);
    assert!(!view.viewing_saved);
    assert!(view.result.is_none());
}

#[test]
fn history_search_matches_url_case_insensitively() {
    init_logging();
    let state = with_history(scraper_state());
    let (state, _) = update(state, Msg::HistoryToggled);
    let (state, _) = update(state, Msg::HistorySearchChanged("ALPHA".into()));
    let panel = scraper_view(&state).history_panel.unwrap();
    assert_eq!(panel.total, 2);
    assert_eq!(panel.rows.len(), 1);
    assert_eq!(panel.rows[0].url, "https://alpha.example.com");

    let (state, _) = update(state, Msg::HistorySearchChanged("nothing-here".into()));
    assert!(scraper_view(&state).history_panel.unwrap().rows.is_empty());
}

#[test]
fn history_mutations_become_effects() {
    init_logging();
    let state = with_history(scraper_state());
    let (state, effects) = update(state, Msg::HistoryRemoveClicked { id: "a".into() });
    assert_eq!(effects, vec![Effect::RemoveHistory { id: "a".into() }]);
    let (_, effects) = update(state, Msg::HistoryClearClicked);
    assert_eq!(effects, vec![Effect::ClearHistory]);
}

#[test]
fn history_row_download_uses_host_filename() {
    init_logging();
    let state = with_history(scraper_state());
    let (_, effects) = update(state, Msg::HistoryDownloadClicked { id: "b".into() });
    match effects.as_slice() {
        [Effect::Download { filename, contents }] => {
            assert_eq!(filename, "scrape-beta.example.org.json");
            assert!(contents.starts_with("{\n  \"result\": {"));
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn downloads_of_current_result() {
    init_logging();
    let state = scraped(scraper_state(), "https://www.example.com/a");

    let (state, effects) = update(state, Msg::DownloadJsonClicked);
    match effects.as_slice() {
        [Effect::Download { filename, .. }] => assert_eq!(filename, "scrape-result.json"),
        other => panic!("unexpected effects {other:?}"),
    }

    let (state, effects) = update(state, Msg::DownloadTextClicked);
    match effects.as_slice() {
        [Effect::Download { filename, contents }] => {
            assert_eq!(filename, "scrape-example.com.txt");
            assert!(contents.starts_with("URL: https://www.example.com/a\n"));
        }
        other => panic!("unexpected effects {other:?}"),
    }

    let (state, _) = update(
        state,
        Msg::DownloadSaved {
            path: "/tmp/scrape-example.com.txt".into(),
        },
    );
    assert_eq!(state.view().toast.unwrap().title, "Download saved");
}

#[test]
fn downloads_without_result_do_nothing() {
    init_logging();
    let (_, effects) = update(scraper_state(), Msg::DownloadJsonClicked);
    assert!(effects.is_empty());
    let (_, effects) = update(scraper_state(), Msg::CopyJsonClicked);
    assert!(effects.is_empty());
}

#[test]
fn copy_uses_full_strings_and_resets_indicator() {
    init_logging();
    let long = "x".repeat(150);
    let response = response_from(json!({ "result": { "url": "https://example.com", "text": long } }));
    let state = with_history(scraper_state());
    let state = update(
        state,
        Msg::HistoryLoaded(vec![HistoryItem::new("long", response)]),
    )
    .0;
    let (state, _) = update(state, Msg::HistorySelected { id: "long".into() });

    let (state, effects) = update(state, Msg::CopyJsonClicked);
    match effects.as_slice() {
        [Effect::CopyToClipboard(text)] => assert!(text.contains(&long)),
        other => panic!("unexpected effects {other:?}"),
    }
    assert!(scraper_view(&state).result.unwrap().copied);

    let (state, _) = update(
        state,
        Msg::Tick {
            elapsed_ms: COPIED_INDICATOR_MS,
        },
    );
    assert!(!scraper_view(&state).result.unwrap().copied);
}

#[test]
fn tree_toggles_apply_and_reset_with_new_result() {
    init_logging();
    let state = scraped(scraper_state(), "https://example.com");
    let (state, _) = update(state, Msg::ResultTabSelected(ResultTab::RawJson));

    let root_open = |state: &AppState| match scraper_view(state).result.unwrap().tree {
        TreeNode::Container(node) => node.expanded,
        other => panic!("unexpected root {other:?}"),
    };
    assert!(root_open(&state));

    let (state, _) = update(state, Msg::TreeNodeToggled { path: String::new() });
    assert!(!root_open(&state));
    assert_eq!(scraper_view(&state).result.unwrap().tab, ResultTab::RawJson);

    let state = scraped(state, "https://example.org");
    assert!(root_open(&state));
}
