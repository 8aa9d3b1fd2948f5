use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use engine_logging::{engine_debug, engine_info};
use scraper_core::{update, AppState, AppViewModel, Msg, Screen};
use scraper_engine::{
    ClientSettings, ConfigStore, EngineHandle, FileKeyValueStore, HistoryStore, KeyValueStore,
    Notifier,
};

use super::effects::EffectRunner;
use super::paths::{default_api_url, AppPaths};
use super::ui::constants::{
    ANIMATION_FRAME_MS, MAX_FRAME_MS, MIN_WINDOW_SIZE, WINDOW_SIZE, WINDOW_TITLE,
};
use super::{logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let paths = AppPaths::from_env();
    logging::initialize(&paths.data_dir);
    engine_info!(
        "Profile dir {:?}, downloads dir {:?}",
        paths.data_dir,
        paths.download_dir
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ScraperApp::new(cc, paths)))),
    )
    .map_err(|err| anyhow::anyhow!("UI terminated with an error: {err}"))
}

struct ScraperApp {
    state: AppState,
    runner: EffectRunner,
    /// Messages produced outside a frame, handled at the start of the next one.
    inbox: Vec<Msg>,
    last_frame: Option<Instant>,
}

impl ScraperApp {
    fn new(cc: &eframe::CreationContext<'_>, paths: AppPaths) -> Self {
        let ctx = cc.egui_ctx.clone();
        let notifier: Notifier = Arc::new(move || ctx.request_repaint());

        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(paths.data_dir));
        let config = ConfigStore::new(store.clone(), default_api_url());
        if config.has_default() {
            engine_info!("Using build-time API URL");
        }

        let mut runner = EffectRunner::new(
            EngineHandle::new(ClientSettings::default(), Some(notifier)),
            HistoryStore::new(store),
            config,
            paths.download_dir,
        );
        let inbox = runner.startup();

        Self {
            state: AppState::new(),
            runner,
            inbox,
            last_frame: None,
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, msgs: Vec<Msg>) {
        let mut queue: VecDeque<Msg> = msgs.into();
        let mut clipboard = ctx.clone();
        while let Some(msg) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            if !effects.is_empty() {
                engine_debug!("Running {} effect(s)", effects.len());
            }
            queue.extend(self.runner.run(effects, &mut clipboard));
        }
    }

    fn frame_elapsed_ms(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.duration_since(last).as_millis() as u64)
            .unwrap_or(0);
        self.last_frame = Some(now);
        elapsed.min(MAX_FRAME_MS)
    }
}

impl eframe::App for ScraperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut msgs = std::mem::take(&mut self.inbox);
        msgs.push(Msg::Tick {
            elapsed_ms: self.frame_elapsed_ms(),
        });
        msgs.extend(self.runner.poll());
        self.dispatch(ctx, msgs);

        let view = self.state.view();
        let outbox = ui::render::render(ctx, &view);
        if !outbox.is_empty() {
            self.dispatch(ctx, outbox);
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        } else if is_animating(&view) {
            ctx.request_repaint_after(Duration::from_millis(ANIMATION_FRAME_MS));
        }
    }
}

fn is_animating(view: &AppViewModel) -> bool {
    if view.toast.is_some() {
        return true;
    }
    match &view.screen {
        Screen::Loading(_) => true,
        Screen::Landing => false,
        Screen::Scraper(scraper) => {
            scraper.form.loading || scraper.result.as_ref().is_some_and(|r| r.copied)
        }
    }
}
