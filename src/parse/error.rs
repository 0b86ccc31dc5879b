use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    ImageNotFound(String),
    Url(String),
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e.to_string())
    }
}

impl Error {
    pub fn image_not_found(label: &str) -> Self {
        Self::ImageNotFound(label.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageNotFound(label) => write!(f, "Could not find {label} image."),
            Self::Url(msg) => write!(f, "Invalid image url: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
