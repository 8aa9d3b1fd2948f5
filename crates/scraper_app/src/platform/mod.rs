mod app;
mod effects;
mod logging;
mod paths;
mod ui;

pub use app::run_app;
