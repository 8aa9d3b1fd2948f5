use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use scraper_core::ScrapeResponse;
use scraper_engine::{EngineEvent, EngineHandle, Notifier, ScrapeApi, ScrapeError};
use serde_json::json;

#[derive(Default)]
struct RecordingApi {
    calls: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl ScrapeApi for RecordingApi {
    async fn scrape(&self, base_url: &str, url: &str) -> Result<ScrapeResponse, ScrapeError> {
        self.calls
            .lock()
            .unwrap()
            .push((base_url.to_string(), url.to_string()));
        if url.contains("fail") {
            return Err(ScrapeError::Transport {
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        Ok(ScrapeResponse::from_value(json!({ "result": { "url": url } })).unwrap())
    }
}

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn completions_carry_their_request_id() {
    let api = Arc::new(RecordingApi::default());
    let engine = EngineHandle::with_client(api.clone(), None);

    engine.scrape(7, "https://api.example", "https://example.com");

    let Some(EngineEvent::ScrapeCompleted { request_id, result }) = engine.recv_timeout(WAIT)
    else {
        panic!("no completion");
    };
    assert_eq!(request_id, 7);
    assert_eq!(result.unwrap().result().unwrap().url, "https://example.com");
    assert_eq!(
        api.calls.lock().unwrap().as_slice(),
        &[(
            "https://api.example".to_string(),
            "https://example.com".to_string()
        )]
    );
}

#[test]
fn failures_are_delivered_as_events() {
    let engine = EngineHandle::with_client(Arc::new(RecordingApi::default()), None);

    engine.scrape(3, "https://api.example", "https://fail.example");

    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::ScrapeCompleted { request_id, result }) => {
            assert_eq!(request_id, 3);
            assert_eq!(
                result.unwrap_err().to_string(),
                "Scrape failed: 502 - bad gateway"
            );
        }
        None => panic!("no completion"),
    }
}

#[test]
fn notifier_runs_once_per_event() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let notifier: Notifier = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let engine = EngineHandle::with_client(Arc::new(RecordingApi::default()), Some(notifier));

    engine.scrape(1, "https://api.example", "https://a.example");
    engine.scrape(2, "https://api.example", "https://b.example");

    let mut ids = vec![
        engine.recv_timeout(WAIT).expect("first"),
        engine.recv_timeout(WAIT).expect("second"),
    ]
    .into_iter()
    .map(|EngineEvent::ScrapeCompleted { request_id, .. }| request_id)
    .collect::<Vec<_>>();
    ids.sort_unstable();

    assert_eq!(ids, vec![1, 2]);
    // The notifier fires just after the send, so give it a moment.
    let deadline = Instant::now() + WAIT;
    while count.load(Ordering::SeqCst) < 2 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn try_recv_is_empty_when_idle() {
    let engine = EngineHandle::with_client(Arc::new(RecordingApi::default()), None);
    assert!(engine.try_recv().is_none());
}
