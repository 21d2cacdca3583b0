//! xkcd API client with an in-memory cache
//!
//! Uses async reqwest; every lookup goes through the cache first.

use crate::cache::ComicCache;
use crate::comic::Comic;
use crate::error::{ComicError, Result};
use std::time::{Duration, Instant};

/// Metadata document served for every comic
const INFO_DOCUMENT: &str = "info.0.json";

/// Upper bound on how much of a response body is read
pub const MAX_BODY_BYTES: usize = 64_000;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin base URL, e.g. `http://xkcd.com`
    pub base_url: String,
    /// Timeout for each individual fetch
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://xkcd.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Fetches comics from the configured origin and memoizes them
#[derive(Debug)]
pub struct XkcdClient {
    base_url: String,
    http: reqwest::Client,
    cache: ComicCache,
}

impl XkcdClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent("comic_server/1.0")
            .build()
            .map_err(ComicError::HttpClient)?;

        Ok(Self {
            base_url: config.base_url,
            http,
            cache: ComicCache::new(),
        })
    }

    /// Client with default timeout for the given origin
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ComicCache {
        &self.cache
    }

    /// Build the metadata URL for a comic. Id 0 is the latest comic.
    pub fn build_url(&self, id: u64) -> String {
        let mut url = self.base_url.clone();
        if !url.ends_with('/') {
            url.push('/');
        }

        if id != 0 {
            url.push_str(&format!("{}/", id));
        }

        url.push_str(INFO_DOCUMENT);
        url
    }

    /// Fetch a comic, checking the cache first
    pub async fn fetch(&self, id: u64) -> Result<Comic> {
        let start = Instant::now();
        let result = self.lookup(id).await;
        log::info!(
            "fetch comic {} took {} ms",
            id,
            start.elapsed().as_millis()
        );
        result
    }

    async fn lookup(&self, id: u64) -> Result<Comic> {
        if let Some(comic) = self.cache.get(id) {
            log::debug!("Cache hit for comic {}", id);
            return Ok(comic);
        }

        log::debug!("Cache miss for comic {}, fetching from origin", id);
        let comic = self.fetch_remote(id).await?;
        self.cache.put(id, comic.clone());

        Ok(comic)
    }

    async fn fetch_remote(&self, id: u64) -> Result<Comic> {
        let url = self.build_url(id);
        log::debug!("Fetching comic from: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ComicError::Connect { id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ComicError::Status { id, status });
        }

        let body = read_limited(response, MAX_BODY_BYTES)
            .await
            .map_err(|source| ComicError::Read { id, source })?;

        serde_json::from_slice(&body).map_err(|source| ComicError::Decode { id, source })
    }
}

/// Read at most `limit` bytes of the body; anything beyond is dropped.
async fn read_limited(mut response: reqwest::Response, limit: usize) -> reqwest::Result<Vec<u8>> {
    let mut body = Vec::new();

    while let Some(chunk) = response.chunk().await? {
        let remaining = limit - body.len();
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            break;
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
