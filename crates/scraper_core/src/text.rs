use chrono::{DateTime, Local};

const ELLIPSIS: &str = "...";

/// Shortens `text` to `max_chars` characters plus `...` when it is longer.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => (format!("{}{ELLIPSIS}", &text[..cut]), true),
        None => (text.to_string(), false),
    }
}

/// Local, human-readable rendering of a backend timestamp.
///
/// Falls back to the raw string when it is not RFC 3339.
pub fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Scrape targets and API base URLs must be absolute http(s) URLs.
pub fn is_http_url(candidate: &str) -> bool {
    candidate.starts_with("http://") || candidate.starts_with("https://")
}

/// Drops a single trailing slash, as stored base URLs never end with one.
pub fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_with_ellipsis("abc", 3), ("abc".to_string(), false));
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let (shown, truncated) = truncate_with_ellipsis("ééééé", 2);
        assert!(truncated);
        assert_eq!(shown, "éé...");
    }

    #[test]
    fn only_one_trailing_slash_is_removed() {
        assert_eq!(strip_trailing_slash("https://api.example.com//"), "https://api.example.com/");
        assert_eq!(strip_trailing_slash("https://api.example.com"), "https://api.example.com");
    }

    #[test]
    fn unparseable_timestamps_are_shown_raw() {
        assert_eq!(display_timestamp("yesterday"), "yesterday");
        assert_ne!(display_timestamp("2024-01-01T00:00:00Z"), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn http_urls_need_a_scheme() {
        assert!(is_http_url("https://example.com"));
        assert!(is_http_url("http://example.com"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url("ftp://example.com"));
    }
}
