mod html;
mod text;

pub use html::render_html;
pub use text::render_text;

use crate::{fetch::ImageResult, parse::SectionMenu};

/// Relative to the site directory.
pub const ASSETS_DIR: &str = "assets";
pub const REPORT_FILE: &str = "report.txt";
pub const INDEX_FILE: &str = "index.html";

/// Everything one run scraped, ready to render.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    generated_at: String,
    sections: SectionMenu,
    image: ImageResult,
    ocr_text: Option<String>,
}

impl ExtractionReport {
    pub fn new(
        generated_at: String,
        sections: SectionMenu,
        image: ImageResult,
        ocr_text: String,
    ) -> Self {
        Self {
            generated_at,
            sections,
            image,
            ocr_text: (!ocr_text.is_empty()).then_some(ocr_text),
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub const fn sections(&self) -> &SectionMenu {
        &self.sections
    }

    pub const fn image(&self) -> &ImageResult {
        &self.image
    }

    pub fn ocr_text(&self) -> Option<&str> {
        self.ocr_text.as_deref()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use scraper::Html;
    use url::Url;

    use super::ExtractionReport;
    use crate::config::Config;
    use crate::fetch::ImageResult;
    use crate::parse::SectionMenu;

    pub fn report(ocr_text: &str) -> ExtractionReport {
        let config = Config::default();
        let sections = SectionMenu::from_html(
            &Html::parse_document(
                r#"<h1>Dnevne malice</h1>
                <div><h2>Brezmesna malica</h2><header>Juha & "kruh"</header><p>Špinačni <njoki></p></div>
                <h2>Mesna malica</h2><p>Čevapčiči</p><p>Ajvar</p>"#,
            ),
            &config.menu_page,
        );
        let image = ImageResult {
            url: Url::parse("https://www.bajzovidvori.com/tjednigableci/mursko.jpg?v=1&w=2")
                .unwrap(),
            path: "site/assets/bajz_mursko.jpg".into(),
            bytes: vec![],
        };
        ExtractionReport::new(
            "2026-10-19 10:00 CEST".to_owned(),
            sections,
            image,
            ocr_text.to_owned(),
        )
    }
}
