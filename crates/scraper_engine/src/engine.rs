use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_error, engine_info};
use scraper_core::{RequestId, ScrapeResponse};

use crate::client::{ClientSettings, ReqwestScrapeClient, ScrapeApi, ScrapeError};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ScrapeCompleted {
        request_id: RequestId,
        result: Result<ScrapeResponse, ScrapeError>,
    },
}

/// Called from the engine thread after an event is queued, e.g. to wake the UI.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

enum EngineCommand {
    Scrape {
        request_id: RequestId,
        base_url: String,
        url: String,
    },
}

/// Runs scrape requests on a background tokio runtime.
///
/// Requests never block the caller; completions come back through
/// [`EngineHandle::try_recv`] tagged with the id they were issued under.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, notifier: Option<Notifier>) -> Self {
        Self::with_client(Arc::new(ReqwestScrapeClient::new(settings)), notifier)
    }

    pub fn with_client(client: Arc<dyn ScrapeApi>, notifier: Option<Notifier>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => Some(runtime),
                Err(err) => {
                    engine_error!("Failed to start async runtime: {}", err);
                    None
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                let notifier = notifier.clone();
                match &runtime {
                    Some(runtime) => {
                        runtime.spawn(async move {
                            let event = handle_command(client.as_ref(), command).await;
                            deliver(&event_tx, notifier.as_ref(), event);
                        });
                    }
                    None => {
                        let EngineCommand::Scrape { request_id, .. } = command;
                        let event = EngineEvent::ScrapeCompleted {
                            request_id,
                            result: Err(ScrapeError::Network(
                                "async runtime unavailable".to_string(),
                            )),
                        };
                        deliver(&event_tx, notifier.as_ref(), event);
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn scrape(
        &self,
        request_id: RequestId,
        base_url: impl Into<String>,
        url: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Scrape {
            request_id,
            base_url: base_url.into(),
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(client: &dyn ScrapeApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Scrape {
            request_id,
            base_url,
            url,
        } => {
            engine_info!("Scrape {} started for {}", request_id, url);
            let result = client.scrape(&base_url, &url).await;
            match &result {
                Ok(_) => engine_info!("Scrape {} succeeded", request_id),
                Err(err) => engine_info!("Scrape {} failed: {}", request_id, err),
            }
            EngineEvent::ScrapeCompleted { request_id, result }
        }
    }
}

fn deliver(event_tx: &mpsc::Sender<EngineEvent>, notifier: Option<&Notifier>, event: EngineEvent) {
    if event_tx.send(event).is_ok() {
        if let Some(notify) = notifier {
            notify();
        }
    }
}
