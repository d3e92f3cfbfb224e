use async_trait::async_trait;
use thiserror::Error;

use crate::feed::application::domain::entities::{BlogSource, Feed};
use crate::feed::application::ports::outgoing::feed_fetcher::FeedFetcher;
use crate::feed::application::service::feed_parser::parse_feed;

pub const DEFAULT_MAX_ITEMS: usize = 5;

#[derive(Debug, Clone, Error)]
pub enum FetchBlogPostsError {
    #[error("Username is required for this source")]
    MissingUsername,
    #[error("Custom feed URL is required")]
    MissingCustomUrl,
    #[error("Failed to fetch blog posts: {0}")]
    FetchFailed(String),
}

/// Conventional per-platform feed location.
pub fn feed_url(source: BlogSource, username: &str) -> Option<String> {
    match source {
        BlogSource::Devto => Some(format!("https://dev.to/feed/{}", username)),
        BlogSource::Medium => Some(format!("https://medium.com/feed/@{}", username)),
        BlogSource::Hashnode => Some(format!("https://{}.hashnode.dev/rss.xml", username)),
        BlogSource::Custom => None,
    }
}

/// An interface for fetching and parsing blog feeds
#[async_trait]
pub trait IFetchBlogPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        source: BlogSource,
        username: Option<&str>,
        custom_url: Option<&str>,
        max_items: usize,
    ) -> Result<Feed, FetchBlogPostsError>;
}

pub struct FetchBlogPostsUseCase<F>
where
    F: FeedFetcher,
{
    feed_fetcher: F,
}

impl<F> FetchBlogPostsUseCase<F>
where
    F: FeedFetcher,
{
    pub fn new(feed_fetcher: F) -> Self {
        Self { feed_fetcher }
    }
}

#[async_trait]
impl<F> IFetchBlogPostsUseCase for FetchBlogPostsUseCase<F>
where
    F: FeedFetcher + Send + Sync,
{
    async fn execute(
        &self,
        source: BlogSource,
        username: Option<&str>,
        custom_url: Option<&str>,
        max_items: usize,
    ) -> Result<Feed, FetchBlogPostsError> {
        let url = match source {
            BlogSource::Custom => custom_url
                .filter(|u| !u.is_empty())
                .map(|u| u.to_string())
                .ok_or(FetchBlogPostsError::MissingCustomUrl)?,
            _ => {
                let username = username
                    .filter(|u| !u.is_empty())
                    .ok_or(FetchBlogPostsError::MissingUsername)?;
                feed_url(source, username).expect("platform sources have a feed url")
            }
        };

        let body = self
            .feed_fetcher
            .fetch(&url)
            .await
            .map_err(|e| FetchBlogPostsError::FetchFailed(e.to_string()))?;

        parse_feed(&body, max_items).map_err(|e| FetchBlogPostsError::FetchFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::application::ports::outgoing::feed_fetcher::FeedFetchError;
    use std::sync::Mutex;

    struct MockFeedFetcher {
        body: Result<String, FeedFetchError>,
        requested: Mutex<Vec<String>>,
    }

    impl MockFeedFetcher {
        fn ok(body: &str) -> Self {
            Self {
                body: Ok(body.to_string()),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl FeedFetcher for MockFeedFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FeedFetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.body.clone()
        }
    }

    const MINIMAL_RSS: &str = r#"<rss><channel>
        <title>Blog</title>
        <item><title>A</title></item>
        <item><title>B</title></item>
    </channel></rss>"#;

    #[test]
    fn test_feed_url_conventions() {
        assert_eq!(
            feed_url(BlogSource::Devto, "ada").as_deref(),
            Some("https://dev.to/feed/ada")
        );
        assert_eq!(
            feed_url(BlogSource::Medium, "ada").as_deref(),
            Some("https://medium.com/feed/@ada")
        );
        assert_eq!(
            feed_url(BlogSource::Hashnode, "ada").as_deref(),
            Some("https://ada.hashnode.dev/rss.xml")
        );
        assert!(feed_url(BlogSource::Custom, "ada").is_none());
    }

    #[tokio::test]
    async fn test_platform_source_builds_url_from_username() {
        let use_case = FetchBlogPostsUseCase::new(MockFeedFetcher::ok(MINIMAL_RSS));

        let feed = use_case
            .execute(BlogSource::Devto, Some("ada"), None, 5)
            .await
            .expect("feed fetched");

        assert_eq!(feed.items.len(), 2);
        assert_eq!(
            use_case.feed_fetcher.requested.lock().unwrap().as_slice(),
            &["https://dev.to/feed/ada".to_string()]
        );
    }

    #[tokio::test]
    async fn test_custom_source_requires_url() {
        let use_case = FetchBlogPostsUseCase::new(MockFeedFetcher::ok(MINIMAL_RSS));

        match use_case.execute(BlogSource::Custom, None, None, 5).await {
            Err(FetchBlogPostsError::MissingCustomUrl) => {}
            _ => panic!("Expected MissingCustomUrl"),
        }

        let feed = use_case
            .execute(BlogSource::Custom, None, Some("https://x.dev/rss"), 5)
            .await
            .expect("custom feed fetched");
        assert_eq!(feed.items.len(), 2);
    }

    #[tokio::test]
    async fn test_platform_source_requires_username() {
        let use_case = FetchBlogPostsUseCase::new(MockFeedFetcher::ok(MINIMAL_RSS));

        match use_case.execute(BlogSource::Medium, None, None, 5).await {
            Err(FetchBlogPostsError::MissingUsername) => {}
            _ => panic!("Expected MissingUsername"),
        }
    }

    #[tokio::test]
    async fn test_max_items_caps_results() {
        let use_case = FetchBlogPostsUseCase::new(MockFeedFetcher::ok(MINIMAL_RSS));

        let feed = use_case
            .execute(BlogSource::Devto, Some("ada"), None, 1)
            .await
            .expect("feed fetched");
        assert_eq!(feed.items.len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_feed_is_wrapped() {
        let fetcher = MockFeedFetcher {
            body: Err(FeedFetchError::Unreachable("timed out".to_string())),
            requested: Mutex::new(Vec::new()),
        };
        let use_case = FetchBlogPostsUseCase::new(fetcher);

        match use_case
            .execute(BlogSource::Devto, Some("ada"), None, 5)
            .await
        {
            Err(FetchBlogPostsError::FetchFailed(msg)) => {
                assert!(msg.contains("timed out"));
            }
            _ => panic!("Expected FetchFailed"),
        }
    }

    #[tokio::test]
    async fn test_malformed_feed_is_wrapped() {
        let use_case = FetchBlogPostsUseCase::new(MockFeedFetcher::ok("<html>nope</html>"));

        match use_case
            .execute(BlogSource::Devto, Some("ada"), None, 5)
            .await
        {
            Err(FetchBlogPostsError::FetchFailed(msg)) => {
                assert!(msg.contains("Malformed feed"));
            }
            _ => panic!("Expected FetchFailed"),
        }
    }
}
