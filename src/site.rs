use std::path::Path;

use chrono::Utc;
use chrono_tz::Tz;
use scraper::Html;
use tokio::fs;

use crate::{
    config::Config,
    fetch,
    ocr::{self, TextRecognizer},
    parse::{locate_image, SectionMenu},
    report::{self, ExtractionReport, ASSETS_DIR, INDEX_FILE, REPORT_FILE},
};

/// Scrapes both pages and writes `report.txt`, the menu image and
/// `index.html` under `site_dir`. Stops at the first network or I/O error;
/// files written before that point are left in place.
pub async fn build_site(
    config: &Config,
    site_dir: &Path,
    tz: Tz,
    recognizer: &dyn TextRecognizer,
) -> crate::Result<ExtractionReport> {
    let assets_dir = site_dir.join(ASSETS_DIR);
    fs::create_dir_all(&assets_dir).await?;
    let client = fetch::make_client()?;

    let menu_page = &config.menu_page;
    let page = fetch::fetch_page(&client, &menu_page.url, config.page_timeout).await?;
    let sections = SectionMenu::from_html(&Html::parse_document(&page), menu_page);
    log::info!("Parsed {} daily menus from {}", sections.len(), menu_page.url);

    let gallery_page = &config.gallery_page;
    let page = fetch::fetch_page(&client, &gallery_page.url, config.page_timeout).await?;
    let image_url = locate_image(&Html::parse_document(&page), gallery_page)?;
    let image = fetch::download_image(
        &client,
        image_url,
        assets_dir.join(gallery_page.file_name),
        config.image_timeout,
    )
    .await?;
    log::info!("Menu image: {} bytes from {}", image.bytes.len(), image.url);

    let ocr_text = ocr::extract_text(recognizer, &image.path, &config.ocr_languages);

    let generated_at = Utc::now()
        .with_timezone(&tz)
        .format("%Y-%m-%d %H:%M %Z")
        .to_string();
    let report = ExtractionReport::new(generated_at, sections, image, ocr_text);

    fs::write(
        assets_dir.join(REPORT_FILE),
        report::render_text(&report, config),
    )
    .await?;
    fs::write(
        site_dir.join(INDEX_FILE),
        report::render_html(&report, config),
    )
    .await?;
    Ok(report)
}
