use std::path::PathBuf;

const DATA_DIR_VAR: &str = "SCRAPER_DATA_DIR";
const DOWNLOAD_DIR_VAR: &str = "SCRAPER_DOWNLOAD_DIR";
const API_URL_VAR: &str = "SCRAPER_API_URL";

const DEFAULT_DATA_DIR: &str = ".scraper";
const DEFAULT_DOWNLOAD_DIR: &str = "downloads";

/// Where the app keeps its profile and puts downloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub download_dir: PathBuf,
}

impl AppPaths {
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let dir = |var: &str, default: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| base.join(default))
        };
        Self {
            data_dir: dir(DATA_DIR_VAR, DEFAULT_DATA_DIR),
            download_dir: dir(DOWNLOAD_DIR_VAR, DEFAULT_DOWNLOAD_DIR),
        }
    }
}

/// Backend URL fixed at build time, else taken from the environment.
pub fn default_api_url() -> Option<String> {
    resolve_api_url(option_env!("SCRAPER_API_URL"), std::env::var(API_URL_VAR).ok())
}

fn resolve_api_url(baked: Option<&str>, runtime: Option<String>) -> Option<String> {
    baked
        .map(str::to_string)
        .filter(|url| !url.is_empty())
        .or(runtime)
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_default_dirs() {
        let paths = AppPaths::resolve(|name| match name {
            "SCRAPER_DATA_DIR" => Some("/tmp/profile".to_string()),
            _ => None,
        });
        assert_eq!(paths.data_dir, PathBuf::from("/tmp/profile"));
        assert!(paths.download_dir.ends_with("downloads"));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let paths = AppPaths::resolve(|_| Some("  ".to_string()));
        assert!(paths.data_dir.ends_with(".scraper"));
    }

    #[test]
    fn baked_url_beats_runtime_url() {
        assert_eq!(
            resolve_api_url(Some("https://baked"), Some("https://env".to_string())),
            Some("https://baked".to_string())
        );
        assert_eq!(
            resolve_api_url(Some(""), Some("https://env".to_string())),
            Some("https://env".to_string())
        );
        assert_eq!(resolve_api_url(None, Some(String::new())), None);
    }
}
