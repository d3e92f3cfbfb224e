use async_trait::async_trait;
use thiserror::Error;

use crate::wakatime::application::domain::entities::WeeklyStats;

#[derive(Debug, Clone, Error)]
pub enum WakaTimeGatewayError {
    #[error("WakaTime API key not configured")]
    ApiKeyMissing,
    #[error("{0}")]
    RequestFailed(String),
}

#[async_trait]
pub trait WakaTimeGateway: Send + Sync {
    /// Last-7-days breakdown.
    async fn fetch_weekly_stats(&self, username: &str)
        -> Result<WeeklyStats, WakaTimeGatewayError>;

    /// All-time summary, passed through as the provider shapes it.
    async fn fetch_all_time_stats(
        &self,
        username: &str,
    ) -> Result<serde_json::Value, WakaTimeGatewayError>;
}
