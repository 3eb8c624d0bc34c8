//! Progress-tracked image loading
//!
//! An image is fetched from its deferred source (or its current one), the
//! caller hears percent progress as the body streams in, and a successful
//! download is shown through an object URL. A failed request is reported on
//! the log bus and nowhere else: there is no retry, no fallback image, and
//! no error returned to the caller.

pub mod http;

pub use http::HttpFetcher;

use crate::logging::LogBus;
use crate::page::dom::ImageElement;
use crate::Result;
use async_trait::async_trait;

/// What came back from a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Transport for image bytes.
///
/// `on_chunk` is called after every received chunk with the bytes received
/// so far and the expected total, when the server announced one.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
        on_chunk: &mut (dyn FnMut(u64, Option<u64>) + Send),
    ) -> Result<FetchResponse>;
}

/// How an image load ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoad {
    /// 200 OK; the body is now attached to the image
    Loaded { bytes: usize },
    /// The server answered with something other than 200; nothing changed
    Status(u16),
    /// The request itself failed
    Failed { reason: String },
    /// The image has neither `data-src` nor `src`
    NoSource,
}

impl ImageLoad {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ImageLoad::Loaded { .. })
    }
}

/// Percent of the body received, when the total size is known
pub fn percent_complete(loaded: u64, total: Option<u64>) -> Option<f64> {
    match total {
        Some(total) if total > 0 => Some(loaded as f64 / total as f64 * 100.0),
        _ => None,
    }
}

/// Fetch `img`'s source and show it once downloaded.
///
/// `on_progress` receives percentages only while the total size is known.
pub async fn load_image_with_progress<F, P>(
    img: &mut ImageElement,
    fetcher: &F,
    bus: &LogBus,
    mut on_progress: P,
) -> ImageLoad
where
    F: ImageFetcher + ?Sized,
    P: FnMut(f64) + Send,
{
    let Some(url) = img.source_url().map(str::to_string) else {
        return ImageLoad::NoSource;
    };

    let mut report = |loaded: u64, total: Option<u64>| {
        if let Some(percent) = percent_complete(loaded, total) {
            on_progress(percent);
        }
    };

    match fetcher.fetch(&url, &mut report).await {
        Ok(response) if response.status == 200 => {
            let bytes = response.body.len();
            img.set_blob(response.body, response.content_type);
            bus.success("Image loaded successfully");
            ImageLoad::Loaded { bytes }
        }
        Ok(response) => {
            log::debug!("image {} not shown, status {}", url, response.status);
            ImageLoad::Status(response.status)
        }
        Err(e) => {
            log::debug!("image {} failed: {}", url, e);
            bus.error("Failed to load image");
            ImageLoad::Failed {
                reason: e.to_string(),
            }
        }
    }
}
