use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum FeedFetchError {
    #[error("Feed unreachable: {0}")]
    Unreachable(String),
}

/// Fetches a feed document body by URL.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FeedFetchError>;
}
