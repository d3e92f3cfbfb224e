//! Scheduled README refresher: pulls blog posts, GitHub activity and
//! WakaTime stats, then rewrites the marker-delimited regions of the
//! published README. Each data source is optional; unconfigured ones
//! are skipped with a warning.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readme_forge::automation::markers::{
    replace_marker_block, BLOG_POST_LIST_END, BLOG_POST_LIST_START, GITHUB_ACTIVITY_END,
    GITHUB_ACTIVITY_START, WAKATIME_END, WAKATIME_START,
};
use readme_forge::automation::render::{
    render_blog_posts, render_github_activity, render_wakatime_stats, ActivityItem,
};
use readme_forge::feed::application::domain::entities::FeedItem;
use readme_forge::feed::application::service::feed_parser::parse_feed;
use readme_forge::wakatime::adapter::outgoing::wakatime_gateway_reqwest::{
    WakaTimeConfig, WakaTimeGatewayReqwest,
};
use readme_forge::wakatime::application::domain::entities::WeeklyStats;
use readme_forge::wakatime::application::ports::outgoing::wakatime_gateway::WakaTimeGateway;

const README_PATH: &str = "README.md";
const TEMPLATE_PATH: &str = "README.template.md";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    info!("Starting README update...");

    let template = read_template().await?;

    let (blog_posts, github_activity, wakatime_stats) = tokio::join!(
        fetch_blog_posts(),
        fetch_github_activity(),
        fetch_wakatime_stats(),
    );

    let mut content = template;

    if let Some(posts) = blog_posts {
        content = apply(
            content,
            BLOG_POST_LIST_START,
            BLOG_POST_LIST_END,
            &render_blog_posts(&posts),
        );
    }

    if let Some(events) = github_activity {
        content = apply(
            content,
            GITHUB_ACTIVITY_START,
            GITHUB_ACTIVITY_END,
            &render_github_activity(&events),
        );
    }

    if let Some(stats) = wakatime_stats {
        content = apply(
            content,
            WAKATIME_START,
            WAKATIME_END,
            &render_wakatime_stats(&stats),
        );
    }

    tokio::fs::write(README_PATH, content)
        .await
        .context("writing README.md")?;

    info!("README updated successfully");
    Ok(())
}

fn apply(content: String, start: &str, end: &str, body: &str) -> String {
    match replace_marker_block(&content, start, end, body) {
        Some(updated) => updated,
        None => {
            warn!("Markers {} / {} not found, section skipped", start, end);
            content
        }
    }
}

async fn read_template() -> Result<String> {
    if Path::new(TEMPLATE_PATH).exists() {
        return tokio::fs::read_to_string(TEMPLATE_PATH)
            .await
            .context("reading README.template.md");
    }
    info!("No template found, using existing README");
    tokio::fs::read_to_string(README_PATH)
        .await
        .context("reading README.md")
}

async fn fetch_blog_posts() -> Option<Vec<FeedItem>> {
    let url = match env::var("RSS_FEED_URL") {
        Ok(url) if !url.is_empty() => url,
        _ => {
            warn!("No RSS feed URL configured");
            return None;
        }
    };

    info!("Fetching blog posts...");
    let body = match reqwest::get(&url).await.and_then(|r| r.error_for_status()) {
        Ok(response) => response.text().await.ok()?,
        Err(e) => {
            warn!("Failed to fetch blog posts: {}", e);
            return None;
        }
    };

    match parse_feed(&body, 5) {
        Ok(feed) => Some(feed.items),
        Err(e) => {
            warn!("Failed to parse blog feed: {}", e);
            None
        }
    }
}

#[derive(Deserialize)]
struct EventDto {
    #[serde(rename = "type")]
    event_type: String,
    repo: EventRepoDto,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    payload: serde_json::Value,
}

#[derive(Deserialize)]
struct EventRepoDto {
    name: String,
}

async fn fetch_github_activity() -> Option<Vec<ActivityItem>> {
    let username = env::var("GITHUB_USERNAME")
        .or_else(|_| env::var("GITHUB_ACTOR"))
        .ok()
        .filter(|u| !u.is_empty());
    let Some(username) = username else {
        warn!("No GitHub username configured");
        return None;
    };

    info!("Fetching GitHub activity...");
    let mut request = reqwest::Client::new()
        .get(format!(
            "https://api.github.com/users/{}/events/public",
            username
        ))
        .header("Accept", "application/vnd.github.v3+json")
        .header("User-Agent", "readme-forge")
        .query(&[("per_page", "5")]);

    if let Ok(token) = env::var("GITHUB_TOKEN") {
        request = request.header("Authorization", format!("token {}", token));
    }

    let events: Vec<EventDto> = match request.send().await.and_then(|r| r.error_for_status()) {
        Ok(response) => response.json().await.ok()?,
        Err(e) => {
            warn!("Failed to fetch GitHub activity: {}", e);
            return None;
        }
    };

    Some(
        events
            .into_iter()
            .map(|dto| ActivityItem {
                commits: dto.payload["commits"]
                    .as_array()
                    .map(|c| c.len())
                    .unwrap_or(0),
                action: dto.payload["action"].as_str().map(|s| s.to_string()),
                ref_type: dto.payload["ref_type"].as_str().map(|s| s.to_string()),
                event_type: dto.event_type,
                repo: dto.repo.name,
                created_at: dto.created_at,
            })
            .collect(),
    )
}

async fn fetch_wakatime_stats() -> Option<WeeklyStats> {
    let config = WakaTimeConfig::from_env();
    if config.api_key.is_none() {
        warn!("No WakaTime API key configured");
        return None;
    }

    info!("Fetching WakaTime stats...");
    let gateway = WakaTimeGatewayReqwest::new(config);
    match gateway.fetch_weekly_stats("current").await {
        Ok(stats) => Some(stats),
        Err(e) => {
            warn!("Failed to fetch WakaTime stats: {}", e);
            None
        }
    }
}
