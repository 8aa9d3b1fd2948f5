use crate::model::{ScrapeResponse, ScrapeResult};
use crate::sections::first_non_empty;
use crate::json_text::pretty_json;

/// Full response body, indented by two spaces.
pub fn json_export(response: &ScrapeResponse) -> String {
    pretty_json(response.as_value())
}

/// Line-oriented transcript of a result: a short header, then one block per
/// section in the order the backend returned them.
pub fn text_export(result: &ScrapeResult) -> String {
    let mut lines: Vec<String> = vec![
        format!("URL: {}", result.url),
        format!("Scraped At: {}", result.scraped_at),
        String::new(),
    ];

    for (index, section) in result.sections.iter().enumerate() {
        let content = &section.content;
        lines.push(format!(
            "== Section {}: {} [{}] ==",
            index + 1,
            first_non_empty(&section.label, "Untitled"),
            section.kind
        ));

        if let Some(headings) = content.headings.as_ref().filter(|h| !h.is_empty()) {
            lines.push("Headings:".to_string());
            lines.extend(headings.iter().map(|heading| format!("- {heading}")));
            lines.push(String::new());
        }

        if let Some(text) = content.text.as_ref().filter(|t| !t.is_empty()) {
            lines.push("Text:".to_string());
            lines.push(text.clone());
            lines.push(String::new());
        }

        if let Some(links) = content.links.as_ref().filter(|l| !l.is_empty()) {
            lines.push("Links:".to_string());
            lines.extend(links.iter().map(|link| {
                format!("- {}: {}", first_non_empty(&link.text, &link.href), link.href)
            }));
            lines.push(String::new());
        }

        if let Some(images) = content.images.as_ref().filter(|i| !i.is_empty()) {
            lines.push("Images:".to_string());
            lines.extend(images.iter().map(|image| {
                let label = first_non_empty(image.alt.as_deref().unwrap_or_default(), &image.src);
                format!("- {label}: {}", image.src)
            }));
            lines.push(String::new());
        }

        lines.push(String::new());
    }

    lines.join("\n")
}
