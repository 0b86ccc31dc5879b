//! Best-effort text recognition for the menu image. Nothing in here can fail
//! the run: a missing engine, an unreadable image or a failing language all
//! come back as empty text.

mod no_ocr;
mod tesseract;

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};

pub use no_ocr::NoOcr;
pub use tesseract::Tesseract;

use crate::parse::normalize;

pub type RecognitionResult = Result<String, Box<dyn std::error::Error>>;

/// Something that can read text off an image file, given a language hint.
pub trait TextRecognizer {
    fn name(&self) -> &'static str;
    fn recognize(&self, image: &Path, language: &str) -> RecognitionResult;
}

/// Tesseract when the binary answers, otherwise the no-op recognizer.
pub fn detect() -> Box<dyn TextRecognizer> {
    match rusty_tesseract::get_tesseract_version() {
        Ok(version) => {
            log::info!("OCR: {}", version.lines().next().unwrap_or("tesseract"));
            Box::new(Tesseract)
        }
        Err(e) => {
            log::info!("OCR unavailable, skipping: {e}");
            Box::new(NoOcr)
        }
    }
}

/// Tries `languages` in order and returns the first non-empty normalized text.
pub fn extract_text(recognizer: &dyn TextRecognizer, image: &Path, languages: &[&str]) -> String {
    match decode(image) {
        Ok(decoded) => {
            let (width, height) = GenericImageView::dimensions(&decoded);
            log::debug!("{}: {width}x{height}", image.display());
        }
        Err(e) => {
            log::warn!("Could not decode {}: {e}", image.display());
            return String::new();
        }
    }

    for language in languages {
        match recognizer.recognize(image, language) {
            Ok(text) => {
                let text = normalize(&text);
                if !text.is_empty() {
                    log::info!(
                        "{} read {} characters ({language})",
                        recognizer.name(),
                        text.chars().count()
                    );
                    return text;
                }
            }
            Err(e) => log::debug!("{} failed for {language}: {e}", recognizer.name()),
        }
    }
    String::new()
}

/// Sniffs the format from the bytes: the download is always saved as `.jpg`
/// whatever the site served.
fn decode(path: &Path) -> Result<DynamicImage, Box<dyn std::error::Error>> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct Scripted;

    impl TextRecognizer for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn recognize(&self, _image: &Path, language: &str) -> RecognitionResult {
            match language {
                "slv" => Err("Failed loading language 'slv'".into()),
                "hrv" => Ok(" \n ".to_owned()),
                _ => Ok("  PONEDJELJAK\n\n grah  s kobasicom ".to_owned()),
            }
        }
    }

    fn blank_png(dir: &Path) -> PathBuf {
        let path = dir.join("blank.png");
        image::RgbImage::new(4, 4).save(&path).unwrap();
        path
    }

    #[test]
    fn test_falls_through_languages() {
        let dir = tempfile::tempdir().unwrap();
        let image = blank_png(dir.path());
        assert_eq!(
            extract_text(&Scripted, &image, &["slv", "hrv", "eng"]),
            "PONEDJELJAK grah s kobasicom"
        );
        assert_eq!(extract_text(&Scripted, &image, &["slv", "hrv"]), "");
    }

    #[test]
    fn test_png_saved_as_jpg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bajz_mursko.jpg");
        image::RgbImage::new(4, 4)
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        assert_eq!(extract_text(&Scripted, &path, &["eng"]), "PONEDJELJAK grah s kobasicom");
    }

    #[test]
    fn test_no_ocr_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let image = blank_png(dir.path());
        assert_eq!(extract_text(&NoOcr, &image, &["slv", "eng"]), "");
    }

    #[test]
    fn test_undecodable_image_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bajz_mursko.jpg");
        std::fs::write(&path, b"<html>404</html>").unwrap();
        assert_eq!(extract_text(&Scripted, &path, &["eng"]), "");
    }
}
