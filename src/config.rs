use std::{env, time::Duration};

use url::Url;

use crate::error::Error;

pub const DEFAULT_TIME_ZONE: &str = "Europe/Ljubljana";

static MENU_URL: &str = "https://pizzeria-popaj.si/";
static GALLERY_URL: &str = "https://www.bajzovidvori.com/index.php/gableci";

/// Everything site specific lives here so tests can point the run at fixtures.
#[derive(Debug, Clone)]
pub struct Config {
    pub menu_page: MenuPageConfig,
    pub gallery_page: GalleryPageConfig,
    pub schedule: Schedule,
    pub ocr_languages: Vec<&'static str>,
    pub page_timeout: Duration,
    pub image_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MenuPageConfig {
    pub url: Url,
    pub title: &'static str,
    /// Anchor heading the section headings are expected to follow.
    pub scope_heading: &'static str,
    /// How many headings after the anchor are searched before giving up on it.
    pub scope_window: usize,
    pub sections: Vec<&'static str>,
    pub container_depth: usize,
    pub filter: LineFilter,
    pub placeholders: Placeholders,
}

#[derive(Debug, Clone, Copy)]
pub struct LineFilter {
    pub reject: &'static str,
    pub strip: char,
}

#[derive(Debug, Clone, Copy)]
pub struct Placeholders {
    pub not_found: &'static str,
    pub no_items: &'static str,
}

#[derive(Debug, Clone)]
pub struct GalleryPageConfig {
    pub url: Url,
    /// scheme://host of `url`, no trailing slash.
    pub origin: String,
    pub title: &'static str,
    pub label: &'static str,
    pub src_token: &'static str,
    pub extensions: [&'static str; 3],
    pub folder_prefix: &'static str,
    pub file_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub hour: u32,
    pub minute: u32,
}

impl Default for LineFilter {
    fn default() -> Self {
        Self {
            reject: "Your browser does not support SVG",
            strip: '~',
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            not_found: "(not found)",
            no_items: "(no items parsed)",
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self { hour: 10, minute: 0 }
    }
}

impl MenuPageConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            title: "Pizzeria Popaj — Dnevne malice",
            scope_heading: "Dnevne malice",
            scope_window: 40,
            sections: vec!["Brezmesna malica", "Mesna malica", "Solatna malica"],
            container_depth: 4,
            filter: LineFilter::default(),
            placeholders: Placeholders::default(),
        }
    }
}

impl GalleryPageConfig {
    pub fn new(url: Url) -> Self {
        let origin = url.origin().ascii_serialization();
        Self {
            url,
            origin,
            title: "Bajzovi dvori — Mursko Središće",
            label: "mursko središće",
            src_token: "mursko",
            extensions: [".jpg", ".jpeg", ".png"],
            folder_prefix: "tjednigableci/",
            file_name: "bajz_mursko.jpg",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_urls(
            Url::parse(MENU_URL).expect("base url should be valid!"),
            Url::parse(GALLERY_URL).expect("base url should be valid!"),
        )
    }
}

impl Config {
    pub fn with_urls(menu_url: Url, gallery_url: Url) -> Self {
        Self {
            menu_page: MenuPageConfig::new(menu_url),
            gallery_page: GalleryPageConfig::new(gallery_url),
            schedule: Schedule::default(),
            ocr_languages: vec!["slv", "eng"],
            page_timeout: Duration::from_secs(30),
            image_timeout: Duration::from_secs(60),
        }
    }

    /// Production constants, with the page urls overridable through
    /// `LUNCH_BOARD_MENU_URL` and `LUNCH_BOARD_GALLERY_URL`.
    pub fn from_env() -> crate::Result<Self> {
        let menu_url = url_from_env("LUNCH_BOARD_MENU_URL", MENU_URL)?;
        let gallery_url = url_from_env("LUNCH_BOARD_GALLERY_URL", GALLERY_URL)?;
        Ok(Self::with_urls(menu_url, gallery_url))
    }
}

fn url_from_env(key: &str, default: &str) -> crate::Result<Url> {
    match env::var(key) {
        Ok(value) => {
            log::info!("{key} set, using {value}");
            Url::parse(&value).map_err(|e| Error::Config(format!("{key} is not a valid url: {e}")))
        }
        Err(_) => Ok(Url::parse(default).expect("base url should be valid!")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_origin() {
        let config = Config::default();
        assert_eq!(config.gallery_page.origin, "https://www.bajzovidvori.com");
        assert_eq!(config.menu_page.sections.len(), 3);
    }

    #[test]
    fn test_local_origin_keeps_port() {
        let url = Url::parse("http://127.0.0.1:8123/index.php/gableci").unwrap();
        assert_eq!(GalleryPageConfig::new(url).origin, "http://127.0.0.1:8123");
    }
}
