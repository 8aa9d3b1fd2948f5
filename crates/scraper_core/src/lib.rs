//! Scraper core: data model, pure state machine and view-model builders.
mod effect;
mod export;
mod filename;
mod history;
mod json_text;
mod model;
mod msg;
mod sections;
mod state;
mod text;
mod tree;
mod update;
mod view_model;

pub use effect::Effect;
pub use export::{json_export, text_export};
pub use filename::{
    download_host, history_json_filename, text_export_filename, DEFAULT_JSON_FILENAME,
};
pub use history::filter_history;
pub use json_text::{number_literal, pretty_json};
pub use model::{
    HistoryItem, Image, Link, RequestId, ScrapeResponse, ScrapeResult, Section, SectionContent,
};
pub use msg::Msg;
pub use sections::{
    section_views, Capped, ImageView, LinkView, SectionView, MAX_RAW_HTML_PREVIEW,
    MAX_VISIBLE_IMAGES, MAX_VISIBLE_LINKS,
};
pub use state::{
    intro_total_ms, normalize_api_url, AppState, ResultTab, ScrapeStatus, View,
    COPIED_INDICATOR_MS, INTRO_TEXT, NOT_CONFIGURED_MARKER, TOAST_DURATION_MS,
};
pub use text::{display_timestamp, is_http_url, strip_trailing_slash, truncate_with_ellipsis};
pub use tree::{
    build_tree, is_expanded, ContainerKind, ContainerNode, TreeEntry, TreeNode,
    DEFAULT_EXPANDED_DEPTH, MAX_DISPLAY_STRING,
};
pub use update::update;
pub use view_model::{
    ApiUrlPromptView, AppViewModel, ErrorView, FormView, HistoryPanelView, HistoryRowView,
    IntroView, ResultView, Screen, ScraperView, ToastView,
};
