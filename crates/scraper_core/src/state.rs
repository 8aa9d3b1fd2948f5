use std::collections::BTreeSet;

use crate::filter_history;
use crate::model::{HistoryItem, RequestId, ScrapeResponse};
use crate::sections::section_views;
use crate::text::{display_timestamp, is_http_url, strip_trailing_slash};
use crate::tree::build_tree;
use crate::view_model::{
    ApiUrlPromptView, AppViewModel, ErrorView, FormView, HistoryPanelView, HistoryRowView,
    IntroView, ResultView, Screen, ScraperView, ToastView,
};

/// Text typed out by the intro screen.
pub const INTRO_TEXT: &str = "Universal Scraper...";
/// Time per typed intro character.
pub const INTRO_TYPE_INTERVAL_MS: u64 = 80;
/// Pause after the text is complete, before fading.
pub const INTRO_HOLD_MS: u64 = 400;
/// Fade-out duration before the landing page appears.
pub const INTRO_FADE_MS: u64 = 500;
pub const TOAST_DURATION_MS: u64 = 5_000;
pub const COPIED_INDICATOR_MS: u64 = 2_000;
/// Error text marker that selects the API URL prompt over the generic banner.
pub const NOT_CONFIGURED_MARKER: &str = "API URL not configured";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Loading,
    Landing,
    Scraper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrapeStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Sections,
    RawJson,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) remaining_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    view: View,
    intro_elapsed_ms: u64,
    url_input: String,
    url_touched: bool,
    status: ScrapeStatus,
    next_request_id: RequestId,
    pending_request: Option<RequestId>,
    data: Option<ScrapeResponse>,
    error: Option<String>,
    selected: Option<ScrapeResponse>,
    show_history: bool,
    history: Vec<HistoryItem>,
    history_query: String,
    api_url_input: String,
    api_url_touched: bool,
    result_tab: ResultTab,
    tree_toggles: BTreeSet<String>,
    toast: Option<Toast>,
    copied_remaining_ms: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_state(&self) -> View {
        self.view
    }

    pub fn status(&self) -> ScrapeStatus {
        self.status
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    /// The result on screen: a selected history snapshot wins over live data.
    pub fn current_result(&self) -> Option<&ScrapeResponse> {
        self.selected.as_ref().or(self.data.as_ref())
    }

    pub fn is_viewing_saved(&self) -> bool {
        self.selected.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match self.view {
            View::Loading => Screen::Loading(self.intro_view()),
            View::Landing => Screen::Landing,
            View::Scraper => Screen::Scraper(Box::new(self.scraper_view())),
        };
        AppViewModel {
            screen,
            toast: self.toast.as_ref().map(|toast| ToastView {
                title: toast.title.clone(),
                description: toast.description.clone(),
            }),
            dirty: self.dirty,
        }
    }

    fn intro_view(&self) -> IntroView {
        let typed = self.typed_intro_chars();
        IntroView {
            text: INTRO_TEXT.chars().take(typed).collect(),
            fading: self.intro_elapsed_ms >= intro_typing_done_ms() + INTRO_HOLD_MS,
        }
    }

    fn typed_intro_chars(&self) -> usize {
        let steps = (self.intro_elapsed_ms / INTRO_TYPE_INTERVAL_MS) as usize;
        steps.saturating_sub(1).min(INTRO_TEXT.chars().count())
    }

    fn scraper_view(&self) -> ScraperView {
        let loading = self.status == ScrapeStatus::Loading;
        let trimmed = self.url_input.trim();
        let valid = is_http_url(trimmed);

        let history_panel = self.show_history.then(|| HistoryPanelView {
            total: self.history.len(),
            query: self.history_query.clone(),
            rows: filter_history(&self.history, &self.history_query)
                .into_iter()
                .map(|item| HistoryRowView {
                    id: item.id.clone(),
                    url: item.url.clone(),
                    scraped_at: display_timestamp(&item.scraped_at),
                })
                .collect(),
        });

        let error = match self.error.as_deref() {
            Some(message) if !loading => Some(if message.contains(NOT_CONFIGURED_MARKER) {
                ErrorView::ConfigPrompt(self.api_url_prompt_view())
            } else {
                ErrorView::Banner(message.to_string())
            }),
            _ => None,
        };

        ScraperView {
            history_count: self.history.len(),
            history_panel,
            form: FormView {
                url: self.url_input.clone(),
                submit_enabled: !trimmed.is_empty() && valid && !loading,
                show_validation_hint: self.url_touched && !trimmed.is_empty() && !valid,
                loading,
            },
            show_skeleton: loading,
            error,
            viewing_saved: self.selected.is_some(),
            result: self.result_view(),
        }
    }

    fn api_url_prompt_view(&self) -> ApiUrlPromptView {
        let normalized = normalize_api_url(&self.api_url_input);
        let valid = !normalized.is_empty() && is_http_url(&normalized);
        ApiUrlPromptView {
            input: self.api_url_input.clone(),
            save_enabled: valid,
            show_validation_hint: self.api_url_touched && !normalized.is_empty() && !valid,
        }
    }

    fn result_view(&self) -> Option<ResultView> {
        let response = self.current_result()?;
        let result = response.result()?;
        Some(ResultView {
            url: result.url.clone(),
            scraped_at: display_timestamp(&result.scraped_at),
            title: result.title().map(str::to_owned),
            tab: self.result_tab,
            section_count: result.sections.len(),
            sections: section_views(&result.sections),
            tree: build_tree(response.as_value(), &self.tree_toggles),
            copied: self.copied_remaining_ms > 0,
            errors: result.errors,
        })
    }

    // --- mutators used by `update` ---

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.mark_dirty();
        }
    }

    /// Advances timers; returns `true` when the screen needs a repaint.
    pub(crate) fn advance_clock(&mut self, elapsed_ms: u64) -> bool {
        let mut changed = false;

        if self.view == View::Loading {
            let before = (self.typed_intro_chars(), self.intro_view().fading);
            self.intro_elapsed_ms = self.intro_elapsed_ms.saturating_add(elapsed_ms);
            if self.intro_elapsed_ms >= intro_total_ms() {
                self.view = View::Landing;
                changed = true;
            } else {
                changed |= before != (self.typed_intro_chars(), self.intro_view().fading);
            }
        }

        if let Some(toast) = self.toast.as_mut() {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
            if toast.remaining_ms == 0 {
                self.toast = None;
                changed = true;
            }
        }

        if self.copied_remaining_ms > 0 {
            self.copied_remaining_ms = self.copied_remaining_ms.saturating_sub(elapsed_ms);
            changed |= self.copied_remaining_ms == 0;
        }

        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub(crate) fn set_url_input(&mut self, input: String) {
        self.url_input = input;
        self.mark_dirty();
    }

    pub(crate) fn touch_url(&mut self) {
        if !self.url_touched {
            self.url_touched = true;
            self.mark_dirty();
        }
    }

    /// Trimmed URL if the form may be submitted right now.
    pub(crate) fn submittable_url(&self) -> Option<String> {
        let trimmed = self.url_input.trim();
        let allowed = self.status != ScrapeStatus::Loading && is_http_url(trimmed);
        allowed.then(|| trimmed.to_string())
    }

    pub(crate) fn begin_scrape(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending_request = Some(request_id);
        self.status = ScrapeStatus::Loading;
        self.error = None;
        self.data = None;
        self.mark_dirty();
        request_id
    }

    /// Clears the pending marker; `false` for stale or unknown completions.
    pub(crate) fn settle_request(&mut self, request_id: RequestId) -> bool {
        if self.pending_request == Some(request_id) {
            self.pending_request = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn apply_success(&mut self, response: ScrapeResponse) {
        self.data = Some(response);
        self.status = ScrapeStatus::Success;
        self.selected = None;
        self.tree_toggles.clear();
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
        self.status = ScrapeStatus::Error;
        self.mark_dirty();
    }

    /// Back to a blank idle form result area.
    pub(crate) fn reset_scrape(&mut self) {
        self.data = None;
        self.error = None;
        self.status = ScrapeStatus::Idle;
        self.pending_request = None;
        self.tree_toggles.clear();
        self.mark_dirty();
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.tree_toggles.clear();
            self.mark_dirty();
        }
    }

    pub(crate) fn set_api_url_input(&mut self, input: String) {
        self.api_url_input = input;
        self.mark_dirty();
    }

    pub(crate) fn touch_api_url(&mut self) {
        if !self.api_url_touched {
            self.api_url_touched = true;
            self.mark_dirty();
        }
    }

    /// Normalized base URL if the prompt holds a valid one.
    pub(crate) fn savable_api_url(&self) -> Option<String> {
        let normalized = normalize_api_url(&self.api_url_input);
        (!normalized.is_empty() && is_http_url(&normalized)).then_some(normalized)
    }

    pub(crate) fn show_toast(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.toast = Some(Toast {
            title: title.into(),
            description: description.into(),
            remaining_ms: TOAST_DURATION_MS,
        });
        self.mark_dirty();
    }

    pub(crate) fn set_history(&mut self, items: Vec<HistoryItem>) {
        self.history = items;
        self.mark_dirty();
    }

    pub(crate) fn find_history(&self, id: &str) -> Option<&HistoryItem> {
        self.history.iter().find(|item| item.id == id)
    }

    pub(crate) fn select_history(&mut self, id: &str) -> bool {
        let Some(response) = self.find_history(id).map(|item| item.response.clone()) else {
            return false;
        };
        self.selected = Some(response);
        self.show_history = false;
        self.tree_toggles.clear();
        self.mark_dirty();
        true
    }

    pub(crate) fn set_history_visible(&mut self, visible: bool) {
        if self.show_history != visible {
            self.show_history = visible;
            self.mark_dirty();
        }
    }

    pub(crate) fn history_visible(&self) -> bool {
        self.show_history
    }

    pub(crate) fn set_history_query(&mut self, query: String) {
        self.history_query = query;
        self.mark_dirty();
    }

    pub(crate) fn set_result_tab(&mut self, tab: ResultTab) {
        if self.result_tab != tab {
            self.result_tab = tab;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_tree_node(&mut self, path: String) {
        if !self.tree_toggles.remove(&path) {
            self.tree_toggles.insert(path);
        }
        self.mark_dirty();
    }

    pub(crate) fn mark_copied(&mut self) {
        self.copied_remaining_ms = COPIED_INDICATOR_MS;
        self.mark_dirty();
    }
}

/// Trims the prompt input and drops one trailing slash.
pub fn normalize_api_url(input: &str) -> String {
    strip_trailing_slash(input.trim()).to_string()
}

fn intro_typing_done_ms() -> u64 {
    // One tick shows zero characters, then one per tick, then one more tick
    // notices the text is complete.
    INTRO_TYPE_INTERVAL_MS * (INTRO_TEXT.chars().count() as u64 + 2)
}

/// Time from start-up until the landing page replaces the intro.
pub fn intro_total_ms() -> u64 {
    intro_typing_done_ms() + INTRO_HOLD_MS + INTRO_FADE_MS
}
