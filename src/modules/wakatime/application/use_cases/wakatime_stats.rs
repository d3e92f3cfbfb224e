use async_trait::async_trait;
use thiserror::Error;

use crate::wakatime::application::domain::entities::WeeklyStats;
use crate::wakatime::application::ports::outgoing::wakatime_gateway::{
    WakaTimeGateway, WakaTimeGatewayError,
};

#[derive(Debug, Clone, Error)]
pub enum WakaTimeStatsError {
    #[error("Failed to fetch WakaTime stats: {0}")]
    WeeklyFailed(String),
    #[error("Failed to fetch all-time stats: {0}")]
    AllTimeFailed(String),
}

/// An interface for the WakaTime passthrough aggregations
#[async_trait]
pub trait IWakaTimeStatsUseCase: Send + Sync {
    async fn get_weekly_stats(&self, username: &str) -> Result<WeeklyStats, WakaTimeStatsError>;
    async fn get_all_time_stats(
        &self,
        username: &str,
    ) -> Result<serde_json::Value, WakaTimeStatsError>;
}

pub struct WakaTimeStatsService<G>
where
    G: WakaTimeGateway,
{
    gateway: G,
}

impl<G> WakaTimeStatsService<G>
where
    G: WakaTimeGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IWakaTimeStatsUseCase for WakaTimeStatsService<G>
where
    G: WakaTimeGateway + Send + Sync,
{
    async fn get_weekly_stats(&self, username: &str) -> Result<WeeklyStats, WakaTimeStatsError> {
        self.gateway
            .fetch_weekly_stats(username)
            .await
            .map_err(|e| WakaTimeStatsError::WeeklyFailed(e.to_string()))
    }

    async fn get_all_time_stats(
        &self,
        username: &str,
    ) -> Result<serde_json::Value, WakaTimeStatsError> {
        self.gateway
            .fetch_all_time_stats(username)
            .await
            .map_err(|e| WakaTimeStatsError::AllTimeFailed(e.to_string()))
    }
}
