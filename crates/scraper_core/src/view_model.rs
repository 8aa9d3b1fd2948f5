use crate::sections::SectionView;
use crate::state::ResultTab;
use crate::tree::TreeNode;

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub screen: Screen,
    pub toast: Option<ToastView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading(IntroView),
    Landing,
    Scraper(Box<ScraperView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroView {
    pub text: String,
    pub fading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScraperView {
    pub history_count: usize,
    /// When present the panel replaces the main content.
    pub history_panel: Option<HistoryPanelView>,
    pub form: FormView,
    pub show_skeleton: bool,
    pub error: Option<ErrorView>,
    pub viewing_saved: bool,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub url: String,
    pub submit_enabled: bool,
    pub show_validation_hint: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorView {
    /// The backend URL is missing; ask for it inline.
    ConfigPrompt(ApiUrlPromptView),
    Banner(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrlPromptView {
    pub input: String,
    pub save_enabled: bool,
    pub show_validation_hint: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPanelView {
    pub total: usize,
    pub query: String,
    pub rows: Vec<HistoryRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: String,
    pub url: String,
    pub scraped_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub url: String,
    pub scraped_at: String,
    pub title: Option<String>,
    pub tab: ResultTab,
    pub section_count: usize,
    pub sections: Vec<SectionView>,
    pub tree: TreeNode,
    pub copied: bool,
    /// Problems the backend reported while scraping.
    pub errors: Vec<String>,
}
