//! Logger setup for the desktop app.
//!
//! Logs go to the terminal and to `scraper.log` inside the profile directory.

use std::fs::{File, OpenOptions};
use std::path::Path;

use engine_logging::engine_info;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "scraper.log";

/// Installs the global logger. A second call is a no-op.
pub fn initialize(data_dir: &Path) {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(file_logger) = create_file_logger(data_dir, level, config) {
        loggers.push(file_logger);
    }

    if CombinedLogger::init(loggers).is_ok() {
        engine_info!(
            "Session started {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    data_dir: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    if let Err(err) = scraper_engine::ensure_dir(data_dir) {
        eprintln!("Warning: Could not create {:?}: {}", data_dir, err);
        return None;
    }
    let log_path = data_dir.join(LOG_FILENAME);
    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not open log file at {:?}: {}", log_path, err);
            None
        }
    }
}
