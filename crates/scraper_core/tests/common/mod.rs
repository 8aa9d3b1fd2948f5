#![allow(dead_code)]

use scraper_core::{intro_total_ms, update, AppState, Effect, Msg, ScrapeResponse};
use serde_json::{json, Value};

pub fn init_logging() {
    engine_logging::initialize_for_tests();
}

/// A state already past the intro and landing page.
pub fn scraper_state() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::Tick {
            elapsed_ms: intro_total_ms(),
        },
    );
    let (state, _) = update(state, Msg::GetStartedClicked);
    state
}

pub fn submit_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlInputChanged(input.to_string()));
    update(state, Msg::ScrapeSubmitted)
}

pub fn response_for(url: &str) -> ScrapeResponse {
    response_from(json!({
        "result": {
            "url": url,
            "scrapedAt": "2024-05-01T12:00:00Z",
            "meta": { "title": "Example" },
            "sections": [
                { "label": "Intro", "type": "article", "content": { "text": "hello" } }
            ],
            "interactions": {},
            "errors": []
        }
    }))
}

pub fn response_from(body: Value) -> ScrapeResponse {
    ScrapeResponse::from_value(body).expect("object body")
}

pub fn request_id_of(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Scrape { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("scrape effect")
}
