use std::path::Path;

use super::{RecognitionResult, TextRecognizer};

/// Stand-in used when no OCR engine is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOcr;

impl TextRecognizer for NoOcr {
    fn name(&self) -> &'static str {
        "none"
    }

    fn recognize(&self, _image: &Path, _language: &str) -> RecognitionResult {
        Ok(String::new())
    }
}
