use super::ExtractionReport;
use crate::config::Config;

/// The raw `report.txt`: one block per daily menu, then the image and its OCR.
pub fn render_text(report: &ExtractionReport, config: &Config) -> String {
    let mut parts = vec![
        format!("Malice report ({})\n", report.generated_at()),
        format!("{}\n", config.menu_page.title),
    ];
    for section in report.sections() {
        parts.push(format!("\n{}:\n{}", section.name(), section.lines().join("\n")));
    }
    parts.push(format!("\n\n{}\n", config.gallery_page.title));
    parts.push(format!("Image URL: {}\n", report.image().url));
    parts.push(format!("OCR:\n{}", report.ocr_text().unwrap_or("(none)")));
    parts.join("\n")
}
