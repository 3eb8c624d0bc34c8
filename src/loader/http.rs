use super::{FetchResponse, ImageFetcher};
use crate::core::config::GalleryConfig;
use crate::core::constants::USER_AGENT;
use crate::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// Shared HTTP client for image requests. Building it once keeps TLS and
/// the connection pool warm across images. No timeout: a request runs until
/// it succeeds or fails.
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
});

/// Upper bound on how much body buffer is reserved up front from a
/// Content-Length header.
const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

/// [`ImageFetcher`] over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Fetcher backed by the shared client
    pub fn shared() -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
        }
    }

    /// Fetcher with its own client, configured from `config`
    pub fn from_config(config: &GalleryConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::shared()
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        on_chunk: &mut (dyn FnMut(u64, Option<u64>) + Send),
    ) -> Result<FetchResponse> {
        log::debug!("fetch image {}", url);
        let mut response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let total = response.content_length();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let mut body = Vec::with_capacity(total.unwrap_or(0).min(MAX_PREALLOC) as usize);
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
            on_chunk(body.len() as u64, total);
        }

        log::debug!("image {} answered {} ({} bytes)", url, status, body.len());
        Ok(FetchResponse {
            status,
            content_type,
            body,
        })
    }
}
