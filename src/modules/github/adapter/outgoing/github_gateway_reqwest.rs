use async_trait::async_trait;
use serde::Deserialize;

use crate::github::application::domain::entities::GitHubProfile;
use crate::github::application::ports::outgoing::github_gateway::{
    GitHubGateway, GitHubGatewayError, GitHubRepo, RawEvent,
};

const BASE_URL: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "readme-forge";

#[derive(Clone)]
pub struct GitHubGatewayReqwest {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubGatewayReqwest {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT)
    }
}

impl Default for GitHubGatewayReqwest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct ProfileDto {
    login: String,
    name: Option<String>,
    avatar_url: Option<String>,
    bio: Option<String>,
    company: Option<String>,
    location: Option<String>,
    email: Option<String>,
    blog: Option<String>,
    twitter_username: Option<String>,
    hireable: Option<bool>,
    #[serde(default)]
    followers: u32,
    #[serde(default)]
    following: u32,
    #[serde(default)]
    public_repos: u32,
    #[serde(default)]
    public_gists: u32,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
}

#[derive(Deserialize)]
struct RepoDto {
    name: String,
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u32,
    #[serde(default)]
    forks_count: u32,
    #[serde(default)]
    watchers_count: u32,
    #[serde(default)]
    size: u32,
    language: Option<String>,
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    has_issues: bool,
    #[serde(default)]
    open_issues_count: u32,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    updated_at: String,
    #[serde(default)]
    topics: Vec<String>,
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

fn wrap<E: std::fmt::Display>(context: &str) -> impl Fn(E) -> GitHubGatewayError + '_ {
    move |e| GitHubGatewayError::RequestFailed(format!("{}: {}", context, e))
}

#[async_trait]
impl GitHubGateway for GitHubGatewayReqwest {
    async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile, GitHubGatewayError> {
        let dto: ProfileDto = self
            .get(&format!("/users/{}", username))
            .send()
            .await
            .map_err(wrap("Failed to fetch GitHub user"))?
            .error_for_status()
            .map_err(wrap("Failed to fetch GitHub user"))?
            .json()
            .await
            .map_err(wrap("Failed to fetch GitHub user"))?;

        Ok(GitHubProfile {
            name: dto.name,
            login: dto.login,
            avatar_url: dto.avatar_url,
            bio: dto.bio,
            company: dto.company,
            location: dto.location,
            email: dto.email,
            blog: dto.blog,
            twitter_username: dto.twitter_username,
            hireable: dto.hireable,
            followers: dto.followers,
            following: dto.following,
            public_repos: dto.public_repos,
            public_gists: dto.public_gists,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        })
    }

    async fn fetch_repos_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>, GitHubGatewayError> {
        let dtos: Vec<RepoDto> = self
            .get(&format!("/users/{}/repos", username))
            .query(&[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("sort", "updated".to_string()),
                ("direction", "desc".to_string()),
            ])
            .send()
            .await
            .map_err(wrap("Failed to fetch repositories"))?
            .error_for_status()
            .map_err(wrap("Failed to fetch repositories"))?
            .json()
            .await
            .map_err(wrap("Failed to fetch repositories"))?;

        Ok(dtos
            .into_iter()
            .map(|dto| GitHubRepo {
                name: dto.name,
                description: dto.description,
                stargazers_count: dto.stargazers_count,
                forks_count: dto.forks_count,
                watchers_count: dto.watchers_count,
                size: dto.size,
                language: dto.language,
                fork: dto.fork,
                has_issues: dto.has_issues,
                open_issues_count: dto.open_issues_count,
                html_url: dto.html_url,
                updated_at: dto.updated_at,
                topics: dto.topics,
            })
            .collect())
    }

    async fn fetch_events(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<RawEvent>, GitHubGatewayError> {
        let dtos: Vec<EventDto> = self
            .get(&format!("/users/{}/events/public", username))
            .query(&[("per_page", limit.to_string())])
            .send()
            .await
            .map_err(wrap("Failed to fetch recent activity"))?
            .error_for_status()
            .map_err(wrap("Failed to fetch recent activity"))?
            .json()
            .await
            .map_err(wrap("Failed to fetch recent activity"))?;

        Ok(dtos
            .into_iter()
            .map(|dto| RawEvent {
                event_type: dto.event_type,
                repo_name: dto.repo.name,
                created_at: dto.created_at,
                payload: dto.payload,
            })
            .collect())
    }
}
