use scraper::{ElementRef, Html};
use url::Url;

use crate::config::GalleryPageConfig;
use crate::parse::selectors;
use crate::parse::text::heading_text;
use crate::parse::Error;

/// Finds the weekly menu image and returns its absolute url.
///
/// The first `<img>` with a `src` after the labelled heading wins; when there is no such
/// heading (or image), any image whose file name carries the site token is
/// taken instead. Finding neither is an error.
pub fn locate_image(document: &Html, config: &GalleryPageConfig) -> Result<Url, Error> {
    let src = image_after_heading(document, config.label)
        .or_else(|| image_by_file_name(document, config))
        .and_then(|img| img.value().attr("src"))
        .filter(|src| !src.trim().is_empty())
        .ok_or_else(|| Error::image_not_found(config.title))?;
    log::debug!("menu image src: {src}");
    resolve_src(src, config)
}

/// Makes an `<img src>` absolute. Root relative paths and the site's weekly
/// menu folder both hang off the origin, not the page url.
pub fn resolve_src(src: &str, config: &GalleryPageConfig) -> Result<Url, Error> {
    let src = src.trim();
    let url = if src.starts_with('/') {
        Url::parse(&format!("{}{src}", config.origin))?
    } else if src.starts_with(config.folder_prefix) {
        Url::parse(&format!("{}/{src}", config.origin))?
    } else {
        config.url.join(src)?
    };
    Ok(url)
}

fn image_after_heading<'a>(document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    let heading = document
        .select(selectors::headings())
        .find(|h| heading_text(*h).to_lowercase() == label)?;
    document
        .root_element()
        .descendants()
        .skip_while(|node| node.id() != heading.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| {
            el.value().name() == "img"
                && el.value().attr("src").is_some_and(|src| !src.trim().is_empty())
        })
}

fn image_by_file_name<'a>(
    document: &'a Html,
    config: &GalleryPageConfig,
) -> Option<ElementRef<'a>> {
    document.select(selectors::images()).find(|img| {
        let src = img.value().attr("src").unwrap_or_default().to_lowercase();
        src.contains(config.src_token) && config.extensions.iter().any(|ext| src.ends_with(ext))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config() -> GalleryPageConfig {
        GalleryPageConfig::new(
            Url::parse("https://www.bajzovidvori.com/index.php/gableci").unwrap(),
        )
    }

    #[test]
    fn test_locate_image_example() {
        let html =
            fs::read_to_string("./src/parse/html_examples/gallery_page/gableci.html").unwrap();
        let url = locate_image(&Html::parse_document(&html), &config()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.bajzovidvori.com/tjednigableci/Mursko_sredisce_tjedni.jpg"
        );
    }

    #[test]
    fn test_falls_back_to_file_name() {
        let html = r#"
            <h2>Ponuda</h2>
            <img src="/images/logo.svg">
            <img src="/images/Mursko.PNG">
        "#;
        let url = locate_image(&Html::parse_document(html), &config()).unwrap();
        assert_eq!(url.as_str(), "https://www.bajzovidvori.com/images/Mursko.PNG");
    }

    #[test]
    fn test_heading_without_image_falls_back() {
        let html = r#"
            <img src="https://cdn.example.com/mursko-tjedan.jpeg">
            <h3>MURSKO SREDIŠĆE</h3>
            <p>Uskoro</p>
        "#;
        let url = locate_image(&Html::parse_document(html), &config()).unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/mursko-tjedan.jpeg");
    }

    #[test]
    fn test_skips_images_without_src() {
        let html = r#"
            <h2>Mursko Središće</h2>
            <img class="spacer">
            <img src="  ">
            <img src="tjednigableci/tjedan_42.jpg">
        "#;
        let url = locate_image(&Html::parse_document(html), &config()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.bajzovidvori.com/tjednigableci/tjedan_42.jpg"
        );
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let html = r#"<h2>Čakovec</h2><img src="/images/cakovec.jpg">"#;
        let err = locate_image(&Html::parse_document(html), &config()).unwrap_err();
        assert!(matches!(err, Error::ImageNotFound(_)));
    }

    #[test]
    fn test_resolve_src() {
        let config = config();
        assert_eq!(
            resolve_src("/img/menu.jpg", &config).unwrap().as_str(),
            "https://www.bajzovidvori.com/img/menu.jpg"
        );
        assert_eq!(
            resolve_src(" tjednigableci/menu.jpg ", &config).unwrap().as_str(),
            "https://www.bajzovidvori.com/tjednigableci/menu.jpg"
        );
        assert_eq!(
            resolve_src("https://img.example.com/a.jpg", &config)
                .unwrap()
                .as_str(),
            "https://img.example.com/a.jpg"
        );
        assert_eq!(
            resolve_src("slike/a.jpg", &config).unwrap().as_str(),
            "https://www.bajzovidvori.com/index.php/slike/a.jpg"
        );
    }
}
