use std::path::Path;

use rusty_tesseract::{Args, Image};

use super::{RecognitionResult, TextRecognizer};

/// Runs the system `tesseract` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tesseract;

impl TextRecognizer for Tesseract {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &Path, language: &str) -> RecognitionResult {
        let image = Image::from_path(image)?;
        let args = Args {
            lang: language.to_owned(),
            ..Args::default()
        };
        Ok(rusty_tesseract::image_to_string(&image, &args)?)
    }
}
