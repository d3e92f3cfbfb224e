use async_trait::async_trait;
use thiserror::Error;

use crate::github::application::domain::entities::GitHubProfile;

#[derive(Debug, Clone, Error)]
pub enum GitHubGatewayError {
    #[error("{0}")]
    RequestFailed(String),
}

/// Repository attributes the aggregations read.
#[derive(Debug, Clone)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub watchers_count: u32,
    pub size: u32,
    pub language: Option<String>,
    pub fork: bool,
    pub has_issues: bool,
    pub open_issues_count: u32,
    pub html_url: String,
    pub updated_at: String,
    pub topics: Vec<String>,
}

/// A public event as fetched; the payload stays raw JSON until the
/// service picks out the per-type fields.
#[derive(Debug, Clone)]
pub struct RawEvent {
    pub event_type: String,
    pub repo_name: String,
    pub created_at: String,
    pub payload: serde_json::Value,
}

#[async_trait]
pub trait GitHubGateway: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile, GitHubGatewayError>;

    /// One page of the user's repositories, most recently updated first.
    async fn fetch_repos_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>, GitHubGatewayError>;

    async fn fetch_events(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<RawEvent>, GitHubGatewayError>;
}
