use std::path::PathBuf;

use engine_logging::{engine_info, engine_warn};
use scraper_core::{Effect, Msg};
use scraper_engine::{write_download, ConfigStore, EngineEvent, EngineHandle, HistoryStore};

/// Where copied text goes. The app hands in the egui context.
pub trait Clipboard {
    fn copy(&mut self, text: String);
}

impl Clipboard for eframe::egui::Context {
    fn copy(&mut self, text: String) {
        self.copy_text(text);
    }
}

/// Executes effects against the engine and local stores, answering with
/// messages for the state machine.
pub struct EffectRunner {
    engine: EngineHandle,
    history: HistoryStore,
    config: ConfigStore,
    download_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        history: HistoryStore,
        config: ConfigStore,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            engine,
            history,
            config,
            download_dir,
        }
    }

    /// Messages that seed a fresh state with what is already persisted.
    pub fn startup(&mut self) -> Vec<Msg> {
        let items = self.history.load().to_vec();
        vec![Msg::ApiUrlLoaded(self.config.get()), Msg::HistoryLoaded(items)]
    }

    pub fn run(&mut self, effects: Vec<Effect>, clipboard: &mut dyn Clipboard) -> Vec<Msg> {
        effects
            .into_iter()
            .filter_map(|effect| self.run_one(effect, clipboard))
            .collect()
    }

    /// Drains finished scrapes without blocking.
    pub fn poll(&mut self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(|event| match event {
                EngineEvent::ScrapeCompleted { request_id, result } => match result {
                    Ok(response) => Msg::ScrapeSucceeded {
                        request_id,
                        response,
                    },
                    Err(err) => {
                        engine_warn!("Scrape {} failed: {}", request_id, err);
                        Msg::ScrapeFailed {
                            request_id,
                            message: err.to_string(),
                        }
                    }
                },
            })
            .collect()
    }

    fn run_one(&mut self, effect: Effect, clipboard: &mut dyn Clipboard) -> Option<Msg> {
        match effect {
            Effect::Scrape { request_id, url } => {
                engine_info!("Scrape request_id={} url={}", request_id, url);
                self.engine.scrape(request_id, self.config.get(), url);
                None
            }
            Effect::RecordHistory(response) => {
                self.history.add(response);
                Some(self.history_snapshot())
            }
            Effect::RemoveHistory { id } => {
                self.history.remove(&id);
                Some(self.history_snapshot())
            }
            Effect::ClearHistory => {
                self.history.clear();
                Some(self.history_snapshot())
            }
            Effect::SaveApiUrl(url) => {
                self.config.set(&url);
                Some(Msg::ApiUrlLoaded(self.config.get()))
            }
            Effect::CopyToClipboard(text) => {
                clipboard.copy(text);
                None
            }
            Effect::Download { filename, contents } => {
                match write_download(&self.download_dir, &filename, &contents) {
                    Ok(path) => Some(Msg::DownloadSaved {
                        path: path.display().to_string(),
                    }),
                    Err(err) => {
                        engine_warn!("Download of {} failed: {}", filename, err);
                        Some(Msg::DownloadFailed {
                            message: err.to_string(),
                        })
                    }
                }
            }
        }
    }

    fn history_snapshot(&self) -> Msg {
        Msg::HistoryLoaded(self.history.items().to_vec())
    }
}
