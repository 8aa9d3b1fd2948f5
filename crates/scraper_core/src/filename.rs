use url::Url;

/// Default name for the JSON download of the displayed result.
pub const DEFAULT_JSON_FILENAME: &str = "scrape-result.json";

const FALLBACK_HOST: &str = "result";

/// `scrape-{host}.txt` for the text transcript of a result scraped from `url`.
pub fn text_export_filename(url: &str) -> String {
    format!("scrape-{}.txt", download_host(url))
}

/// `scrape-{host}.json` for a history entry's JSON download.
pub fn history_json_filename(url: &str) -> String {
    format!("scrape-{}.json", download_host(url))
}

/// Hostname of `url` without a leading `www.`, or `result` when there is none.
pub fn download_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
        .map(|host| host.strip_prefix("www.").map(str::to_owned).unwrap_or(host))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| FALLBACK_HOST.to_string())
}
