#[cfg(test)]
pub mod test_server;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

/// The downloaded menu image.
#[derive(Debug, Clone)]
pub struct ImageResult {
    pub url: Url,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

pub fn make_client() -> Result<Client, RequestError> {
    Client::builder()
        .gzip(true)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// GETs a page as text. Non-success statuses are errors.
#[instrument(skip(client, url), fields(url = %url), level = Level::DEBUG)]
pub async fn fetch_page(
    client: &Client,
    url: &Url,
    timeout: Duration,
) -> Result<String, RequestError> {
    let start = Instant::now();
    let res = client
        .get(url.clone())
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?;
    let text = res.text().await?;
    log::debug!("Got {url} ({} bytes) in {:?}", text.len(), start.elapsed());
    Ok(text)
}

#[instrument(skip(client, url), fields(url = %url), level = Level::DEBUG)]
pub async fn fetch_bytes(
    client: &Client,
    url: &Url,
    timeout: Duration,
) -> Result<Vec<u8>, RequestError> {
    let start = Instant::now();
    let res = client
        .get(url.clone())
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?;
    let bytes = res.bytes().await?.to_vec();
    log::debug!("Got {url} ({} bytes) in {:?}", bytes.len(), start.elapsed());
    Ok(bytes)
}

/// Fetches `url` and overwrites `dest` with the body.
pub async fn download_image(
    client: &Client,
    url: Url,
    dest: PathBuf,
    timeout: Duration,
) -> crate::Result<ImageResult> {
    let bytes = fetch_bytes(client, &url, timeout).await?;
    tokio::fs::write(&dest, &bytes).await?;
    log::debug!("Saved {url} to {}", dest.display());
    Ok(ImageResult {
        url,
        path: dest,
        bytes,
    })
}
