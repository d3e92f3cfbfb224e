use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

use regex::Regex;

use crate::github::application::domain::entities::{
    ActivityEvent, ActivitySummary, ComprehensiveStats, EventPayload, GitHubProfile, LanguageStat,
    ProfileSummary, RecentlyUpdatedRepo, RepoSummary, RepoTotals, RepositoryStats, SocialStats,
    UserStats,
};
use crate::github::application::ports::outgoing::github_gateway::{
    GitHubGateway, GitHubGatewayError, GitHubRepo, RawEvent,
};

/// Hard guard against runaway pagination: at most 10 pages of 100.
/// Hitting the cap is reported through `RepositoryStats::truncated`.
const REPO_PAGE_LIMIT: u32 = 10;
const REPOS_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Error)]
pub enum GitHubInsightsError {
    #[error("Invalid GitHub username or URL")]
    InvalidUsername,
    #[error("{0}")]
    Upstream(String),
}

impl From<GitHubGatewayError> for GitHubInsightsError {
    fn from(err: GitHubGatewayError) -> Self {
        GitHubInsightsError::Upstream(err.to_string())
    }
}

/// An interface over the GitHub aggregation endpoints
#[async_trait]
pub trait IGitHubInsightsUseCase: Send + Sync {
    async fn get_profile(&self, username: &str) -> Result<GitHubProfile, GitHubInsightsError>;
    async fn get_repos(&self, username: &str) -> Result<Vec<RepoSummary>, GitHubInsightsError>;
    async fn get_activity(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ActivityEvent>, GitHubInsightsError>;
    async fn get_user_stats(&self, username: &str) -> Result<UserStats, GitHubInsightsError>;
    async fn get_comprehensive_stats(
        &self,
        username_or_url: &str,
    ) -> Result<ComprehensiveStats, GitHubInsightsError>;
}

pub struct GitHubInsightsService<G>
where
    G: GitHubGateway,
{
    gateway: G,
}

impl<G> GitHubInsightsService<G>
where
    G: GitHubGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Full repository listing with the pagination guard. The boolean
    /// reports whether the cap cut the listing short.
    async fn fetch_all_repos(
        &self,
        username: &str,
    ) -> Result<(Vec<GitHubRepo>, bool), GitHubGatewayError> {
        let mut all_repos = Vec::new();
        let mut truncated = false;

        for page in 1..=REPO_PAGE_LIMIT {
            let repos = self
                .gateway
                .fetch_repos_page(username, page, REPOS_PER_PAGE)
                .await?;

            let full_page = repos.len() as u32 == REPOS_PER_PAGE;
            all_repos.extend(repos);

            if !full_page {
                return Ok((all_repos, false));
            }
            if page == REPO_PAGE_LIMIT {
                truncated = true;
            }
        }

        Ok((all_repos, truncated))
    }
}

fn github_username_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/([a-zA-Z0-9-]+)").expect("valid regex")
    })
}

fn bare_username_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9-]+$").expect("valid regex"))
}

/// Accepts a bare username or a `github.com/<user>` profile URL
/// (scheme and `www.` optional, trailing slash tolerated).
pub fn extract_username(input: &str) -> Option<String> {
    let input = input.trim().trim_end_matches('/');
    if input.is_empty() {
        return None;
    }

    if let Some(caps) = github_username_re().captures(input) {
        return Some(caps[1].to_string());
    }

    if bare_username_re().is_match(input) {
        return Some(input.to_string());
    }

    None
}

/// Pick out the per-type fields of an event payload.
fn parse_event_payload(event_type: &str, payload: &serde_json::Value) -> EventPayload {
    match event_type {
        "PushEvent" => {
            let commits = payload["commits"].as_array();
            EventPayload {
                commits: Some(commits.map(|c| c.len()).unwrap_or(0)),
                message: commits
                    .and_then(|c| c.first())
                    .and_then(|c| c["message"].as_str())
                    .map(|s| s.to_string()),
                ..Default::default()
            }
        }
        "CreateEvent" => EventPayload {
            ref_type: payload["ref_type"].as_str().map(|s| s.to_string()),
            ref_name: payload["ref"].as_str().map(|s| s.to_string()),
            ..Default::default()
        },
        "IssuesEvent" => EventPayload {
            action: payload["action"].as_str().map(|s| s.to_string()),
            title: payload["issue"]["title"].as_str().map(|s| s.to_string()),
            ..Default::default()
        },
        "PullRequestEvent" => EventPayload {
            action: payload["action"].as_str().map(|s| s.to_string()),
            title: payload["pull_request"]["title"]
                .as_str()
                .map(|s| s.to_string()),
            ..Default::default()
        },
        _ => EventPayload::default(),
    }
}

fn to_activity_event(raw: RawEvent) -> ActivityEvent {
    let payload = parse_event_payload(&raw.event_type, &raw.payload);
    ActivityEvent {
        event_type: raw.event_type,
        repo: raw.repo_name,
        created_at: raw.created_at,
        payload,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn language_histogram(repos: &[GitHubRepo]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for repo in repos {
        if let Some(language) = &repo.language {
            *counts.entry(language.clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn sorted_language_stats(repos: &[GitHubRepo]) -> Vec<LanguageStat> {
    let total = repos.len();
    let mut stats: Vec<LanguageStat> = language_histogram(repos)
        .into_iter()
        .map(|(language, count)| LanguageStat {
            language,
            count,
            percentage: if total == 0 {
                0.0
            } else {
                round2(count as f64 / total as f64 * 100.0)
            },
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then(a.language.cmp(&b.language)));
    stats
}

fn repo_summary(repo: &GitHubRepo) -> RepoSummary {
    RepoSummary {
        name: repo.name.clone(),
        description: repo.description.clone(),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo.language.clone(),
        url: repo.html_url.clone(),
        updated_at: repo.updated_at.clone(),
        topics: repo.topics.clone(),
    }
}

#[async_trait]
impl<G> IGitHubInsightsUseCase for GitHubInsightsService<G>
where
    G: GitHubGateway + Send + Sync,
{
    async fn get_profile(&self, username: &str) -> Result<GitHubProfile, GitHubInsightsError> {
        Ok(self.gateway.fetch_profile(username).await?)
    }

    async fn get_repos(&self, username: &str) -> Result<Vec<RepoSummary>, GitHubInsightsError> {
        let repos = self
            .gateway
            .fetch_repos_page(username, 1, REPOS_PER_PAGE)
            .await?;
        Ok(repos.iter().map(repo_summary).collect())
    }

    async fn get_activity(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ActivityEvent>, GitHubInsightsError> {
        let events = self.gateway.fetch_events(username, limit).await?;
        Ok(events.into_iter().map(to_activity_event).collect())
    }

    async fn get_user_stats(&self, username: &str) -> Result<UserStats, GitHubInsightsError> {
        let (profile, repos) = futures::try_join!(
            self.gateway.fetch_profile(username),
            self.gateway.fetch_repos_page(username, 1, REPOS_PER_PAGE),
        )?;

        let total_stars = repos.iter().map(|r| r.stargazers_count as u64).sum();
        let total_forks = repos.iter().map(|r| r.forks_count as u64).sum();

        Ok(UserStats {
            profile: ProfileSummary {
                name: profile.name.clone(),
                username: profile.login.clone(),
                avatar: profile.avatar_url.clone(),
                bio: profile.bio.clone(),
                followers: profile.followers,
                following: profile.following,
                public_repos: profile.public_repos,
                public_gists: profile.public_gists,
                created_at: profile.created_at.clone(),
            },
            stats: RepoTotals {
                total_stars,
                total_forks,
                total_repos: repos.len(),
                languages: language_histogram(&repos),
            },
            top_repos: repos.iter().take(10).map(repo_summary).collect(),
        })
    }

    async fn get_comprehensive_stats(
        &self,
        username_or_url: &str,
    ) -> Result<ComprehensiveStats, GitHubInsightsError> {
        let username =
            extract_username(username_or_url).ok_or(GitHubInsightsError::InvalidUsername)?;

        // Fixed fan-out: the three fetches are independent.
        let (profile, (repos, truncated), raw_events) = futures::try_join!(
            self.gateway.fetch_profile(&username),
            self.fetch_all_repos(&username),
            self.gateway.fetch_events(&username, 30),
        )
        .map_err(|e| {
            GitHubInsightsError::Upstream(format!("Failed to fetch comprehensive stats: {}", e))
        })?;

        let total_stars: u64 = repos.iter().map(|r| r.stargazers_count as u64).sum();
        let total_forks: u64 = repos.iter().map(|r| r.forks_count as u64).sum();
        let total_watchers: u64 = repos.iter().map(|r| r.watchers_count as u64).sum();
        let total_size_kb: u64 = repos.iter().map(|r| r.size as u64).sum();

        let languages = sorted_language_stats(&repos);

        let forked_repos = repos.iter().filter(|r| r.fork).count();
        let original_repos = repos.len() - forked_repos;
        let repos_with_issues = repos
            .iter()
            .filter(|r| r.has_issues && r.open_issues_count > 0)
            .count();

        let mut by_stars: Vec<&GitHubRepo> = repos.iter().collect();
        by_stars.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        let most_starred_repos: Vec<RepoSummary> =
            by_stars.iter().take(10).map(|r| repo_summary(r)).collect();

        let mut by_updated: Vec<&GitHubRepo> = repos.iter().collect();
        by_updated.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        let recently_updated_repos: Vec<RecentlyUpdatedRepo> = by_updated
            .iter()
            .take(10)
            .map(|r| RecentlyUpdatedRepo {
                name: r.name.clone(),
                description: r.description.clone(),
                stars: r.stargazers_count,
                language: r.language.clone(),
                url: r.html_url.clone(),
                updated_at: r.updated_at.clone(),
            })
            .collect();

        let events: Vec<ActivityEvent> = raw_events.into_iter().map(to_activity_event).collect();

        let mut events_by_type: HashMap<String, u32> = HashMap::new();
        for event in &events {
            *events_by_type.entry(event.event_type.clone()).or_insert(0) += 1;
        }

        let estimated_commits: usize = events
            .iter()
            .filter(|e| e.event_type == "PushEvent")
            .filter_map(|e| e.payload.commits)
            .sum();

        let followers_to_following_ratio = if profile.following > 0 {
            round2(profile.followers as f64 / profile.following as f64)
        } else {
            profile.followers as f64
        };

        Ok(ComprehensiveStats {
            username,
            repository_stats: RepositoryStats {
                total_repos: repos.len(),
                original_repos,
                forked_repos,
                total_stars,
                total_forks,
                total_watchers,
                total_size_kb,
                repos_with_issues,
                truncated,
            },
            top_languages: languages.iter().take(5).cloned().collect(),
            languages,
            most_starred_repos,
            recently_updated_repos,
            activity: ActivitySummary {
                recent_events: events.len(),
                events_by_type,
                estimated_commits,
            },
            social_stats: SocialStats {
                followers: profile.followers,
                following: profile.following,
                followers_to_following_ratio,
            },
            profile,
        })
    }
}
