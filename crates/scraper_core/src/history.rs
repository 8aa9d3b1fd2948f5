use crate::model::HistoryItem;
use crate::text::display_timestamp;

/// Entries whose URL or displayed date contains `query`, ignoring case.
///
/// A blank query keeps everything. Order is preserved.
pub fn filter_history<'a>(items: &'a [HistoryItem], query: &str) -> Vec<&'a HistoryItem> {
    if query.trim().is_empty() {
        return items.iter().collect();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.url.to_lowercase().contains(&query)
                || display_timestamp(&item.scraped_at)
                    .to_lowercase()
                    .contains(&query)
        })
        .collect()
}
