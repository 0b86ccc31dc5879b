use scraper::ElementRef;

use super::normalize;
use crate::config::LineFilter;

/// Text nodes glued together as they appear, for exact heading comparison.
pub fn heading_text(element: ElementRef) -> String {
    normalize(&element.text().collect::<String>())
}

/// Text nodes joined with a space so adjacent inline elements don't fuse.
pub fn element_text(element: ElementRef) -> String {
    normalize(&element.text().collect::<Vec<_>>().join(" "))
}

/// Normalizes a candidate menu line and applies the filter. `None` means drop it.
pub fn clean_line(raw: &str, filter: &LineFilter) -> Option<String> {
    let text = normalize(raw);
    if text.is_empty() || text.contains(filter.reject) {
        return None;
    }
    let text = text.replace(filter.strip, "");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}
