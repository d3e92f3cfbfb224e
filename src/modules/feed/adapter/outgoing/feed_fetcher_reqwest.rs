use async_trait::async_trait;

use crate::feed::application::ports::outgoing::feed_fetcher::{FeedFetchError, FeedFetcher};

#[derive(Clone, Default)]
pub struct FeedFetcherReqwest {
    http: reqwest::Client,
}

impl FeedFetcherReqwest {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl FeedFetcher for FeedFetcherReqwest {
    async fn fetch(&self, url: &str) -> Result<String, FeedFetchError> {
        self.http
            .get(url)
            .send()
            .await
            .map_err(|e| FeedFetchError::Unreachable(e.to_string()))?
            .error_for_status()
            .map_err(|e| FeedFetchError::Unreachable(e.to_string()))?
            .text()
            .await
            .map_err(|e| FeedFetchError::Unreachable(e.to_string()))
    }
}
