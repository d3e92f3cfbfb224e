use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::oauth_provider::{
    OAuthError, OAuthProvider, OAuthUserProfile,
};
use crate::auth::application::use_cases::fetch_profile::{FetchProfileError, IFetchProfileUseCase};
use crate::auth::application::use_cases::guest_session::{
    GuestSession, GuestSessionError, IGuestSessionUseCase,
};
use crate::auth::application::use_cases::oauth_login::{
    IOAuthLoginUseCase, OAuthLoginError, OAuthLoginResult,
};
use crate::feed::application::domain::entities::{BlogSource, Feed, FeedItem};
use crate::feed::application::use_cases::fetch_blog_posts::{
    FetchBlogPostsError, IFetchBlogPostsUseCase,
};
use crate::generator::application::ports::outgoing::preview_repository::PreviewRecord;
use crate::generator::application::use_cases::create_preview::{
    CreatePreviewError, CreatedPreview, ICreatePreviewUseCase,
};
use crate::generator::application::use_cases::fetch_preview::{
    FetchPreviewError, IFetchPreviewUseCase,
};
use crate::github::application::domain::entities::{
    ActivityEvent, ActivitySummary, ComprehensiveStats, EventPayload, GitHubProfile, LanguageStat,
    ProfileSummary, RecentlyUpdatedRepo, RepoSummary, RepoTotals, RepositoryStats, SocialStats,
    UserStats,
};
use crate::github::application::use_cases::github_insights::{
    GitHubInsightsError, IGitHubInsightsUseCase,
};
use crate::template::application::domain::entities::TemplateRecord;
use crate::template::application::ports::outgoing::template_repository::UpdateTemplateData;
use crate::template::application::use_cases::create_template::{
    CreateTemplateError, ICreateTemplateUseCase, NewTemplate,
};
use crate::template::application::use_cases::delete_template::{
    DeleteTemplateError, IDeleteTemplateUseCase,
};
use crate::template::application::use_cases::fetch_shared_template::{
    FetchSharedTemplateError, IFetchSharedTemplateUseCase,
};
use crate::template::application::use_cases::fetch_template::{
    FetchTemplateError, IFetchTemplateUseCase,
};
use crate::template::application::use_cases::fetch_user_templates::{
    FetchUserTemplatesError, IFetchUserTemplatesUseCase,
};
use crate::template::application::use_cases::update_template::{
    IUpdateTemplateUseCase, UpdateTemplateError,
};
use crate::tests::support::template_fixtures::sample_template_record;
use crate::wakatime::application::domain::entities::WeeklyStats;
use crate::wakatime::application::use_cases::wakatime_stats::{
    IWakaTimeStatsUseCase, WakaTimeStatsError,
};

pub fn sample_user(id: Uuid) -> User {
    User {
        id,
        github_id: Some(42),
        email: "octo@cat.dev".to_string(),
        name: "The Octocat".to_string(),
        username: Some("octocat".to_string()),
        avatar_url: None,
        bio: None,
        location: None,
        website: None,
        is_guest: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_guest_user(id: Uuid) -> User {
    User {
        id,
        github_id: None,
        email: format!("guest_{}@temporary.com", 1234567890i64),
        name: "Guest User".to_string(),
        username: None,
        avatar_url: None,
        bio: None,
        location: None,
        website: None,
        is_guest: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// -----------------------------
// Generation stubs
// -----------------------------

pub struct StubCreatePreviewUseCase;

#[async_trait]
impl ICreatePreviewUseCase for StubCreatePreviewUseCase {
    async fn execute(
        &self,
        _template_id: Option<Uuid>,
        _markdown: String,
    ) -> Result<CreatedPreview, CreatePreviewError> {
        Ok(CreatedPreview {
            share_id: "stubshareid00000000000000000000".to_string(),
        })
    }
}

pub struct StubFetchPreviewUseCase;

#[async_trait]
impl IFetchPreviewUseCase for StubFetchPreviewUseCase {
    async fn execute(&self, _share_id: &str) -> Result<PreviewRecord, FetchPreviewError> {
        Err(FetchPreviewError::PreviewNotFound)
    }
}

// -----------------------------
// Template stubs
// -----------------------------

pub struct StubCreateTemplateUseCase;

#[async_trait]
impl ICreateTemplateUseCase for StubCreateTemplateUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        _template: NewTemplate,
    ) -> Result<TemplateRecord, CreateTemplateError> {
        Ok(sample_template_record(user_id))
    }
}

pub struct StubFetchUserTemplatesUseCase;

#[async_trait]
impl IFetchUserTemplatesUseCase for StubFetchUserTemplatesUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
    ) -> Result<Vec<TemplateRecord>, FetchUserTemplatesError> {
        Ok(vec![])
    }
}

pub struct StubFetchTemplateUseCase;

#[async_trait]
impl IFetchTemplateUseCase for StubFetchTemplateUseCase {
    async fn execute(
        &self,
        _requester: Uuid,
        _template_id: Uuid,
    ) -> Result<TemplateRecord, FetchTemplateError> {
        Err(FetchTemplateError::TemplateNotFound)
    }
}

pub struct StubUpdateTemplateUseCase;

#[async_trait]
impl IUpdateTemplateUseCase for StubUpdateTemplateUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _template_id: Uuid,
        _data: UpdateTemplateData,
    ) -> Result<TemplateRecord, UpdateTemplateError> {
        Err(UpdateTemplateError::TemplateNotFound)
    }
}

pub struct StubDeleteTemplateUseCase;

#[async_trait]
impl IDeleteTemplateUseCase for StubDeleteTemplateUseCase {
    async fn execute(&self, _user_id: Uuid, _template_id: Uuid) -> Result<(), DeleteTemplateError> {
        Err(DeleteTemplateError::TemplateNotFound)
    }
}

pub struct StubFetchSharedTemplateUseCase;

#[async_trait]
impl IFetchSharedTemplateUseCase for StubFetchSharedTemplateUseCase {
    async fn execute(&self, _share_id: &str) -> Result<TemplateRecord, FetchSharedTemplateError> {
        Err(FetchSharedTemplateError::TemplateNotFound)
    }
}

// -----------------------------
// Identity stubs
// -----------------------------

pub struct StubOAuthProvider;

#[async_trait]
impl OAuthProvider for StubOAuthProvider {
    fn authorize_url(&self) -> String {
        "https://github.com/login/oauth/authorize?client_id=test".to_string()
    }

    async fn exchange_code(&self, _code: &str) -> Result<OAuthUserProfile, OAuthError> {
        Err(OAuthError::ExchangeFailed(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubOAuthLoginUseCase;

#[async_trait]
impl IOAuthLoginUseCase for StubOAuthLoginUseCase {
    async fn execute(&self, _code: &str) -> Result<OAuthLoginResult, OAuthLoginError> {
        Err(OAuthLoginError::ExchangeFailed(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubGuestSessionUseCase;

#[async_trait]
impl IGuestSessionUseCase for StubGuestSessionUseCase {
    async fn execute(&self) -> Result<GuestSession, GuestSessionError> {
        Err(GuestSessionError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<User, FetchProfileError> {
        Err(FetchProfileError::UserNotFound)
    }
}

// -----------------------------
// Aggregator stubs
// -----------------------------

enum GitHubStubMode {
    Canned,
    Failing(String),
    InvalidUsername,
}

pub struct StubGitHubInsightsUseCase {
    mode: GitHubStubMode,
}

impl Default for StubGitHubInsightsUseCase {
    fn default() -> Self {
        Self {
            mode: GitHubStubMode::Canned,
        }
    }
}

impl StubGitHubInsightsUseCase {
    pub fn failing(message: &str) -> Self {
        Self {
            mode: GitHubStubMode::Failing(message.to_string()),
        }
    }

    pub fn invalid_username() -> Self {
        Self {
            mode: GitHubStubMode::InvalidUsername,
        }
    }

    fn check(&self) -> Result<(), GitHubInsightsError> {
        match &self.mode {
            GitHubStubMode::Canned => Ok(()),
            GitHubStubMode::Failing(msg) => Err(GitHubInsightsError::Upstream(msg.clone())),
            GitHubStubMode::InvalidUsername => Err(GitHubInsightsError::InvalidUsername),
        }
    }
}

fn canned_profile() -> GitHubProfile {
    GitHubProfile {
        name: Some("The Octocat".to_string()),
        login: "octocat".to_string(),
        avatar_url: None,
        bio: None,
        company: None,
        location: None,
        email: None,
        blog: None,
        twitter_username: None,
        hireable: None,
        followers: 10,
        following: 4,
        public_repos: 1,
        public_gists: 0,
        created_at: "2011-01-25T18:44:36Z".to_string(),
        updated_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

fn canned_repo() -> RepoSummary {
    RepoSummary {
        name: "hello-world".to_string(),
        description: Some("My first repo".to_string()),
        stars: 5,
        forks: 1,
        language: Some("Rust".to_string()),
        url: "https://github.com/octocat/hello-world".to_string(),
        updated_at: "2026-01-01T00:00:00Z".to_string(),
        topics: vec![],
    }
}

#[async_trait]
impl IGitHubInsightsUseCase for StubGitHubInsightsUseCase {
    async fn get_profile(&self, _username: &str) -> Result<GitHubProfile, GitHubInsightsError> {
        self.check()?;
        Ok(canned_profile())
    }

    async fn get_repos(&self, _username: &str) -> Result<Vec<RepoSummary>, GitHubInsightsError> {
        self.check()?;
        Ok(vec![canned_repo()])
    }

    async fn get_activity(
        &self,
        _username: &str,
        _limit: u32,
    ) -> Result<Vec<ActivityEvent>, GitHubInsightsError> {
        self.check()?;
        Ok(vec![ActivityEvent {
            event_type: "PushEvent".to_string(),
            repo: "octocat/hello-world".to_string(),
            created_at: "2026-01-02T00:00:00Z".to_string(),
            payload: EventPayload {
                commits: Some(2),
                message: Some("update".to_string()),
                ..Default::default()
            },
        }])
    }

    async fn get_user_stats(&self, _username: &str) -> Result<UserStats, GitHubInsightsError> {
        self.check()?;
        Ok(UserStats {
            profile: ProfileSummary {
                name: Some("The Octocat".to_string()),
                username: "octocat".to_string(),
                avatar: None,
                bio: None,
                followers: 10,
                following: 4,
                public_repos: 1,
                public_gists: 0,
                created_at: "2011-01-25T18:44:36Z".to_string(),
            },
            stats: RepoTotals {
                total_stars: 5,
                total_forks: 1,
                total_repos: 1,
                languages: HashMap::from([("Rust".to_string(), 1)]),
            },
            top_repos: vec![canned_repo()],
        })
    }

    async fn get_comprehensive_stats(
        &self,
        _username_or_url: &str,
    ) -> Result<ComprehensiveStats, GitHubInsightsError> {
        self.check()?;
        Ok(ComprehensiveStats {
            username: "octocat".to_string(),
            profile: canned_profile(),
            repository_stats: RepositoryStats {
                total_repos: 1,
                original_repos: 1,
                forked_repos: 0,
                total_stars: 5,
                total_forks: 1,
                total_watchers: 5,
                total_size_kb: 10,
                repos_with_issues: 0,
                truncated: false,
            },
            languages: vec![LanguageStat {
                language: "Rust".to_string(),
                count: 1,
                percentage: 100.0,
            }],
            top_languages: vec![LanguageStat {
                language: "Rust".to_string(),
                count: 1,
                percentage: 100.0,
            }],
            most_starred_repos: vec![canned_repo()],
            recently_updated_repos: vec![RecentlyUpdatedRepo {
                name: "hello-world".to_string(),
                description: None,
                stars: 5,
                language: Some("Rust".to_string()),
                url: "https://github.com/octocat/hello-world".to_string(),
                updated_at: "2026-01-01T00:00:00Z".to_string(),
            }],
            activity: ActivitySummary {
                recent_events: 1,
                events_by_type: HashMap::from([("PushEvent".to_string(), 1)]),
                estimated_commits: 2,
            },
            social_stats: SocialStats {
                followers: 10,
                following: 4,
                followers_to_following_ratio: 2.5,
            },
        })
    }
}

pub struct StubWakaTimeStatsUseCase {
    configured: bool,
}

impl Default for StubWakaTimeStatsUseCase {
    fn default() -> Self {
        Self { configured: true }
    }
}

impl StubWakaTimeStatsUseCase {
    pub fn unconfigured() -> Self {
        Self { configured: false }
    }
}

#[async_trait]
impl IWakaTimeStatsUseCase for StubWakaTimeStatsUseCase {
    async fn get_weekly_stats(&self, _username: &str) -> Result<WeeklyStats, WakaTimeStatsError> {
        if !self.configured {
            return Err(WakaTimeStatsError::WeeklyFailed(
                "WakaTime API key not configured".to_string(),
            ));
        }
        Ok(WeeklyStats {
            total_seconds: 3600.0,
            daily_average: 514.0,
            human_readable_total: "1 hr".to_string(),
            languages: vec![],
            editors: vec![],
            projects: vec![],
            operating_systems: vec![],
        })
    }

    async fn get_all_time_stats(
        &self,
        _username: &str,
    ) -> Result<serde_json::Value, WakaTimeStatsError> {
        if !self.configured {
            return Err(WakaTimeStatsError::AllTimeFailed(
                "WakaTime API key not configured".to_string(),
            ));
        }
        Ok(serde_json::json!({ "total_seconds": 1000000 }))
    }
}

#[derive(Default)]
pub struct StubFetchBlogPostsUseCase;

#[async_trait]
impl IFetchBlogPostsUseCase for StubFetchBlogPostsUseCase {
    async fn execute(
        &self,
        _source: BlogSource,
        _username: Option<&str>,
        _custom_url: Option<&str>,
        max_items: usize,
    ) -> Result<Feed, FetchBlogPostsError> {
        let items = vec![FeedItem {
            title: Some("Stub Post".to_string()),
            link: Some("https://blog.example.com/stub".to_string()),
            pub_date: Some("Mon, 02 Mar 2026 10:00:00 GMT".to_string()),
            author: Some("Ada".to_string()),
            content_snippet: Some("A stubbed post".to_string()),
            categories: vec![],
        }];

        Ok(Feed {
            title: Some("Stub Feed".to_string()),
            description: None,
            link: Some("https://blog.example.com".to_string()),
            items: items.into_iter().take(max_items).collect(),
        })
    }
}
