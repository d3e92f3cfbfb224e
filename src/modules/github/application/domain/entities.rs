use serde::Serialize;
use std::collections::HashMap;

/// GitHub profile as surfaced by the passthrough endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubProfile {
    pub name: Option<String>,
    pub login: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub hireable: Option<bool>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
    pub public_gists: u32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub language: String,
    pub count: u32,
    /// Share of all repositories, rounded to two decimals.
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
    pub url: String,
    pub updated_at: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyUpdatedRepo {
    pub name: String,
    pub description: Option<String>,
    pub stars: u32,
    pub language: Option<String>,
    pub url: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStats {
    pub total_repos: usize,
    pub original_repos: usize,
    pub forked_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_watchers: u64,
    #[serde(rename = "totalSizeKB")]
    pub total_size_kb: u64,
    pub repos_with_issues: usize,
    /// True when the repository listing hit the pagination cap and
    /// results past it were dropped.
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub recent_events: usize,
    pub events_by_type: HashMap<String, u32>,
    pub estimated_commits: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialStats {
    pub followers: u32,
    pub following: u32,
    pub followers_to_following_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveStats {
    pub username: String,
    pub profile: GitHubProfile,
    pub repository_stats: RepositoryStats,
    pub languages: Vec<LanguageStat>,
    pub top_languages: Vec<LanguageStat>,
    pub most_starred_repos: Vec<RepoSummary>,
    pub recently_updated_repos: Vec<RecentlyUpdatedRepo>,
    pub activity: ActivitySummary,
    pub social_stats: SocialStats,
}

/// Lighter aggregation backing `/api/stats/{username}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub profile: ProfileSummary,
    pub stats: RepoTotals,
    pub top_repos: Vec<RepoSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: Option<String>,
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
    pub public_gists: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoTotals {
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_repos: usize,
    pub languages: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: String,
    pub created_at: String,
    pub payload: EventPayload,
}

/// The interesting slice of an event payload; which fields are set
/// depends on the event type.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
