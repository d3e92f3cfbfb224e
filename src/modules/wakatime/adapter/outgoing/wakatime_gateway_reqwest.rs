use async_trait::async_trait;
use serde::Deserialize;
use std::env;

use crate::wakatime::application::domain::entities::{LanguageSlice, TimeSlice, WeeklyStats};
use crate::wakatime::application::ports::outgoing::wakatime_gateway::{
    WakaTimeGateway, WakaTimeGatewayError,
};

const BASE_URL: &str = "https://wakatime.com/api/v1";

#[derive(Debug, Clone)]
pub struct WakaTimeConfig {
    pub api_key: Option<String>,
}

impl WakaTimeConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("WAKATIME_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}

#[derive(Clone)]
pub struct WakaTimeGatewayReqwest {
    http: reqwest::Client,
    config: WakaTimeConfig,
}

impl WakaTimeGatewayReqwest {
    pub fn new(config: WakaTimeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn api_key(&self) -> Result<&str, WakaTimeGatewayError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(WakaTimeGatewayError::ApiKeyMissing)
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct WeeklyStatsDto {
    #[serde(default)]
    total_seconds: f64,
    #[serde(default)]
    daily_average: f64,
    #[serde(default)]
    human_readable_total: String,
    #[serde(default)]
    languages: Vec<SliceDto>,
    #[serde(default)]
    editors: Vec<SliceDto>,
    #[serde(default)]
    projects: Vec<SliceDto>,
    #[serde(default)]
    operating_systems: Vec<SliceDto>,
}

#[derive(Deserialize)]
struct SliceDto {
    name: String,
    #[serde(default)]
    total_seconds: f64,
    #[serde(default)]
    percent: f64,
    #[serde(default)]
    text: String,
}

fn wrap(e: reqwest::Error) -> WakaTimeGatewayError {
    WakaTimeGatewayError::RequestFailed(e.to_string())
}

#[async_trait]
impl WakaTimeGateway for WakaTimeGatewayReqwest {
    async fn fetch_weekly_stats(
        &self,
        username: &str,
    ) -> Result<WeeklyStats, WakaTimeGatewayError> {
        let api_key = self.api_key()?;

        let envelope: Envelope<WeeklyStatsDto> = self
            .http
            .get(format!("{}/users/{}/stats/last_7_days", BASE_URL, username))
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(wrap)?
            .error_for_status()
            .map_err(wrap)?
            .json()
            .await
            .map_err(wrap)?;

        let dto = envelope.data;
        let slice = |s: &SliceDto| TimeSlice {
            name: s.name.clone(),
            total_seconds: s.total_seconds,
            percent: s.percent,
        };

        Ok(WeeklyStats {
            total_seconds: dto.total_seconds,
            daily_average: dto.daily_average,
            human_readable_total: dto.human_readable_total,
            languages: dto
                .languages
                .iter()
                .map(|l| LanguageSlice {
                    name: l.name.clone(),
                    total_seconds: l.total_seconds,
                    percent: l.percent,
                    text: l.text.clone(),
                })
                .collect(),
            editors: dto.editors.iter().map(slice).collect(),
            projects: dto.projects.iter().map(slice).collect(),
            operating_systems: dto.operating_systems.iter().map(slice).collect(),
        })
    }

    async fn fetch_all_time_stats(
        &self,
        username: &str,
    ) -> Result<serde_json::Value, WakaTimeGatewayError> {
        let api_key = self.api_key()?;

        let envelope: Envelope<serde_json::Value> = self
            .http
            .get(format!(
                "{}/users/{}/all_time_since_today",
                BASE_URL, username
            ))
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(wrap)?
            .error_for_status()
            .map_err(wrap)?
            .json()
            .await
            .map_err(wrap)?;

        Ok(envelope.data)
    }
}
