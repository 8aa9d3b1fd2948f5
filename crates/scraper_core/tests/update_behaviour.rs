mod common;

use common::{
    init_logging, request_id_of, response_for, response_from, scraper_state, submit_url,
};
use scraper_core::{
    intro_total_ms, update, AppState, Effect, ErrorView, HistoryItem, Msg, Screen, ScrapeStatus,
    ScraperView, TreeNode, View, INTRO_TEXT, TOAST_DURATION_MS,
};
use serde_json::json;

fn scraper_view(state: &AppState) -> ScraperView {
    match state.view().screen {
        Screen::Scraper(view) => *view,
        other => panic!("expected scraper screen, got {other:?}"),
    }
}

#[test]
fn intro_types_text_then_lands() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.view_state(), View::Loading);

    let (state, _) = update(state, Msg::Tick { elapsed_ms: 80 * 6 });
    match state.view().screen {
        Screen::Loading(intro) => {
            assert_eq!(intro.text, "Unive");
            assert!(!intro.fading);
        }
        other => panic!("unexpected screen {other:?}"),
    }

    let (state, _) = update(
        state,
        Msg::Tick {
            elapsed_ms: intro_total_ms() - 80 * 6 - 1,
        },
    );
    match state.view().screen {
        Screen::Loading(intro) => {
            assert_eq!(intro.text, INTRO_TEXT);
            assert!(intro.fading);
        }
        other => panic!("unexpected screen {other:?}"),
    }

    let (mut state, effects) = update(state, Msg::Tick { elapsed_ms: 1 });
    assert_eq!(state.view_state(), View::Landing);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn landing_and_scraper_switch_both_ways() {
    init_logging();
    let state = scraper_state();
    assert_eq!(state.view_state(), View::Scraper);

    let (state, _) = update(state, Msg::BackClicked);
    assert_eq!(state.view_state(), View::Landing);
    assert_eq!(state.view().screen, Screen::Landing);

    let (state, _) = update(state, Msg::GetStartedClicked);
    assert_eq!(state.view_state(), View::Scraper);
}

#[test]
fn get_started_is_ignored_during_intro() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::GetStartedClicked);
    assert_eq!(state.view_state(), View::Loading);
}

#[test]
fn urls_without_http_scheme_never_submit() {
    init_logging();
    for input in ["example.com", "ftp://example.com", "   ", "www.example.com/path"] {
        let (state, effects) = submit_url(scraper_state(), input);
        assert!(effects.is_empty(), "input {input:?} produced {effects:?}");
        assert_eq!(state.status(), ScrapeStatus::Idle);
        assert!(!scraper_view(&state).form.submit_enabled);
    }
}

#[test]
fn validation_hint_waits_for_touch() {
    init_logging();
    let (state, _) = update(scraper_state(), Msg::UrlInputChanged("example.com".into()));
    assert!(!scraper_view(&state).form.show_validation_hint);

    let (state, _) = update(state, Msg::UrlInputBlurred);
    assert!(scraper_view(&state).form.show_validation_hint);
}

#[test]
fn submit_trims_url_and_blocks_resubmission() {
    init_logging();
    let (state, effects) = submit_url(scraper_state(), "  https://example.com/page  ");
    assert_eq!(
        effects,
        vec![Effect::Scrape {
            request_id: 1,
            url: "https://example.com/page".to_string(),
        }]
    );
    assert_eq!(state.status(), ScrapeStatus::Loading);
    let view = scraper_view(&state);
    assert!(!view.form.submit_enabled);
    assert!(view.form.loading);
    assert!(view.show_skeleton);

    let (state, effects) = update(state, Msg::ScrapeSubmitted);
    assert!(effects.is_empty());
    assert_eq!(state.status(), ScrapeStatus::Loading);
}

#[test]
fn success_shows_result_and_records_history() {
    init_logging();
    let (state, effects) = submit_url(scraper_state(), "https://example.com");
    let request_id = request_id_of(&effects);
    let response = response_for("https://example.com");

    let (state, effects) = update(
        state,
        Msg::ScrapeSucceeded {
            request_id,
            response: response.clone(),
        },
    );

    assert_eq!(effects, vec![Effect::RecordHistory(response.clone())]);
    assert_eq!(state.status(), ScrapeStatus::Success);
    assert_eq!(state.current_result(), Some(&response));

    let view = scraper_view(&state);
    let result = view.result.expect("result view");
    assert_eq!(result.url, "https://example.com");
    assert_eq!(result.title.as_deref(), Some("Example"));
    assert_eq!(result.section_count, 1);
    assert!(view.error.is_none());
    assert!(!view.show_skeleton);
}

#[test]
fn stale_completions_are_ignored() {
    init_logging();
    let (state, effects) = submit_url(scraper_state(), "https://example.com");
    let request_id = request_id_of(&effects);

    let (state, effects) = update(
        state,
        Msg::ScrapeSucceeded {
            request_id: request_id + 7,
            response: response_for("https://other.example.com"),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.status(), ScrapeStatus::Loading);
    assert!(state.current_result().is_none());
}

#[test]
fn missing_api_url_error_opens_config_prompt() {
    init_logging();
    let (state, effects) = submit_url(scraper_state(), "https://example.com");
    let request_id = request_id_of(&effects);
    let (state, _) = update(
        state,
        Msg::ScrapeFailed {
            request_id,
            message: "API URL not configured. Set SCRAPER_API_URL or save one below.".into(),
        },
    );

    assert_eq!(state.status(), ScrapeStatus::Error);
    match scraper_view(&state).error {
        Some(ErrorView::ConfigPrompt(prompt)) => assert!(!prompt.save_enabled),
        other => panic!("expected config prompt, got {other:?}"),
    }
}

#[test]
fn other_errors_show_dismissable_banner() {
    init_logging();
    let (state, effects) = submit_url(scraper_state(), "https://example.com");
    let request_id = request_id_of(&effects);
    let message = "Scrape failed: 502 - Bad Gateway".to_string();
    let (state, _) = update(
        state,
        Msg::ScrapeFailed {
            request_id,
            message: message.clone(),
        },
    );
    assert_eq!(scraper_view(&state).error, Some(ErrorView::Banner(message)));

    let (state, _) = update(state, Msg::ErrorDismissed);
    assert_eq!(state.status(), ScrapeStatus::Idle);
    assert!(state.error().is_none());
    assert!(scraper_view(&state).error.is_none());
}

#[test]
fn saving_api_url_normalizes_and_toasts() {
    init_logging();
    let (state, _) = update(scraper_state(), Msg::ApiUrlLoaded(String::new()));
    let (state, _) = update(state, Msg::ApiUrlInputChanged("api.example.com".into()));
    let (state, effects) = update(state, Msg::ApiUrlSaveClicked);
    assert!(effects.is_empty());
    assert!(state.view().toast.is_none());

    let (state, _) = update(
        state,
        Msg::ApiUrlInputChanged("  https://api.example.com/  ".into()),
    );
    let (state, effects) = update(state, Msg::ApiUrlSaveClicked);
    assert_eq!(
        effects,
        vec![Effect::SaveApiUrl("https://api.example.com".to_string())]
    );
    let toast = state.view().toast.expect("toast");
    assert_eq!(toast.title, "API URL saved");

    let (state, _) = update(
        state,
        Msg::Tick {
            elapsed_ms: TOAST_DURATION_MS,
        },
    );
    assert!(state.view().toast.is_none());
}

#[test]
fn mistyped_result_fields_still_show_the_result() {
    init_logging();
    let (state, effects) = submit_url(scraper_state(), "https://example.com");
    let request_id = request_id_of(&effects);
    let response = response_from(json!({
        "result": {
            "url": "https://example.com",
            "scrapedAt": "2024-05-01T12:00:00Z",
            "sections": [{ "label": "Intro", "type": "article", "content": {} }],
            "errors": [{ "code": 1, "message": "timeout" }]
        }
    }));

    let (state, _) = update(
        state,
        Msg::ScrapeSucceeded {
            request_id,
            response: response.clone(),
        },
    );

    let result = scraper_view(&state).result.expect("result view");
    assert_eq!(result.url, "https://example.com");
    assert_eq!(result.section_count, 1);
    assert_eq!(
        result.errors,
        vec![r#"{"code":1,"message":"timeout"}"#.to_string()]
    );
    assert!(matches!(result.tree, TreeNode::Container(_)));

    let item = HistoryItem::new("saved", response);
    assert_eq!(item.url, "https://example.com");
    assert_eq!(item.scraped_at, "2024-05-01T12:00:00Z");
}
