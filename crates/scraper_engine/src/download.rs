use std::path::{Path, PathBuf};

use engine_logging::engine_info;

use crate::persist::{AtomicFileWriter, PersistError};

const FALLBACK_NAME: &str = "download";

/// Saves `contents` as `filename` inside `dir` and returns the final path.
///
/// Characters that are unsafe in file names become `_`. An existing file is
/// never overwritten: `name (1).ext`, `name (2).ext`, ... are tried instead.
pub fn write_download(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, PersistError> {
    let writer = AtomicFileWriter::new(dir.to_path_buf());
    let path = writer.write_new(candidate_names(sanitize_filename(filename)), contents)?;
    engine_info!("Saved download to {}", path.display());
    Ok(path)
}

pub fn sanitize_filename(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&[' ', '.'][..]);
    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn candidate_names(name: String) -> impl Iterator<Item = String> {
    let (stem, ext) = match name.rfind('.') {
        Some(idx) if idx > 0 => (name[..idx].to_string(), name[idx..].to_string()),
        _ => (name.clone(), String::new()),
    };
    std::iter::once(name).chain((1u32..).map(move |n| format!("{stem} ({n}){ext}")))
}

#[cfg(test)]
mod tests {
    use super::{candidate_names, sanitize_filename};

    #[test]
    fn separators_and_reserved_characters_are_replaced() {
        assert_eq!(sanitize_filename("scrape-a/b:c.txt"), "scrape-a_b_c.txt");
        assert_eq!(sanitize_filename("scrape-example.com.json"), "scrape-example.com.json");
    }

    #[test]
    fn numbered_names_keep_the_extension() {
        let names: Vec<_> = candidate_names("scrape.json".to_string()).take(3).collect();
        assert_eq!(names, vec!["scrape.json", "scrape (1).json", "scrape (2).json"]);

        let bare: Vec<_> = candidate_names(".env".to_string()).take(2).collect();
        assert_eq!(bare, vec![".env", ".env (1)"]);
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(sanitize_filename(" . "), "download");
    }
}
