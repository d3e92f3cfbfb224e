use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::oauth_provider::OAuthProvider;
use crate::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::auth::application::use_cases::guest_session::IGuestSessionUseCase;
use crate::auth::application::use_cases::oauth_login::IOAuthLoginUseCase;
use crate::feed::application::use_cases::fetch_blog_posts::IFetchBlogPostsUseCase;
use crate::generator::application::use_cases::create_preview::ICreatePreviewUseCase;
use crate::generator::application::use_cases::fetch_preview::IFetchPreviewUseCase;
use crate::github::application::use_cases::github_insights::IGitHubInsightsUseCase;
use crate::template::application::use_cases::{
    create_template::ICreateTemplateUseCase, delete_template::IDeleteTemplateUseCase,
    fetch_shared_template::IFetchSharedTemplateUseCase, fetch_template::IFetchTemplateUseCase,
    fetch_user_templates::IFetchUserTemplatesUseCase, update_template::IUpdateTemplateUseCase,
};
use crate::tests::support::stubs::*;
use crate::wakatime::application::use_cases::wakatime_stats::IWakaTimeStatsUseCase;
use crate::AppState;

pub const TEST_FRONTEND_URL: &str = "http://localhost:5173";

pub struct TestAppStateBuilder {
    create_preview: Arc<dyn ICreatePreviewUseCase + Send + Sync>,
    fetch_preview: Arc<dyn IFetchPreviewUseCase + Send + Sync>,
    create_template: Arc<dyn ICreateTemplateUseCase + Send + Sync>,
    fetch_user_templates: Arc<dyn IFetchUserTemplatesUseCase + Send + Sync>,
    fetch_template: Arc<dyn IFetchTemplateUseCase + Send + Sync>,
    update_template: Arc<dyn IUpdateTemplateUseCase + Send + Sync>,
    delete_template: Arc<dyn IDeleteTemplateUseCase + Send + Sync>,
    fetch_shared_template: Arc<dyn IFetchSharedTemplateUseCase + Send + Sync>,
    oauth_provider: Arc<dyn OAuthProvider + Send + Sync>,
    oauth_login: Arc<dyn IOAuthLoginUseCase + Send + Sync>,
    guest_session: Arc<dyn IGuestSessionUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    github_insights: Arc<dyn IGitHubInsightsUseCase + Send + Sync>,
    wakatime_stats: Arc<dyn IWakaTimeStatsUseCase + Send + Sync>,
    blog_feed: Arc<dyn IFetchBlogPostsUseCase + Send + Sync>,
    frontend_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_preview: Arc::new(StubCreatePreviewUseCase),
            fetch_preview: Arc::new(StubFetchPreviewUseCase),
            create_template: Arc::new(StubCreateTemplateUseCase),
            fetch_user_templates: Arc::new(StubFetchUserTemplatesUseCase),
            fetch_template: Arc::new(StubFetchTemplateUseCase),
            update_template: Arc::new(StubUpdateTemplateUseCase),
            delete_template: Arc::new(StubDeleteTemplateUseCase),
            fetch_shared_template: Arc::new(StubFetchSharedTemplateUseCase),
            oauth_provider: Arc::new(StubOAuthProvider),
            oauth_login: Arc::new(StubOAuthLoginUseCase),
            guest_session: Arc::new(StubGuestSessionUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            github_insights: Arc::new(StubGitHubInsightsUseCase::default()),
            wakatime_stats: Arc::new(StubWakaTimeStatsUseCase::default()),
            blog_feed: Arc::new(StubFetchBlogPostsUseCase),
            frontend_url: TEST_FRONTEND_URL.to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_preview(
        mut self,
        uc: impl ICreatePreviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_preview = Arc::new(uc);
        self
    }

    pub fn with_fetch_preview(
        mut self,
        uc: impl IFetchPreviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_preview = Arc::new(uc);
        self
    }

    pub fn with_create_template(
        mut self,
        uc: impl ICreateTemplateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_template = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_templates(
        mut self,
        uc: impl IFetchUserTemplatesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_templates = Arc::new(uc);
        self
    }

    pub fn with_fetch_template(
        mut self,
        uc: impl IFetchTemplateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_template = Arc::new(uc);
        self
    }

    pub fn with_update_template(
        mut self,
        uc: impl IUpdateTemplateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_template = Arc::new(uc);
        self
    }

    pub fn with_delete_template(
        mut self,
        uc: impl IDeleteTemplateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_template = Arc::new(uc);
        self
    }

    pub fn with_fetch_shared_template(
        mut self,
        uc: impl IFetchSharedTemplateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_shared_template = Arc::new(uc);
        self
    }

    pub fn with_oauth_provider(
        mut self,
        provider: impl OAuthProvider + Send + Sync + 'static,
    ) -> Self {
        self.oauth_provider = Arc::new(provider);
        self
    }

    pub fn with_oauth_login(
        mut self,
        uc: impl IOAuthLoginUseCase + Send + Sync + 'static,
    ) -> Self {
        self.oauth_login = Arc::new(uc);
        self
    }

    pub fn with_guest_session(
        mut self,
        uc: impl IGuestSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.guest_session = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_github_insights(
        mut self,
        uc: impl IGitHubInsightsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.github_insights = Arc::new(uc);
        self
    }

    pub fn with_wakatime_stats(
        mut self,
        uc: impl IWakaTimeStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.wakatime_stats = Arc::new(uc);
        self
    }

    pub fn with_blog_feed(
        mut self,
        uc: impl IFetchBlogPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog_feed = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_preview_use_case: self.create_preview,
            fetch_preview_use_case: self.fetch_preview,
            create_template_use_case: self.create_template,
            fetch_user_templates_use_case: self.fetch_user_templates,
            fetch_template_use_case: self.fetch_template,
            update_template_use_case: self.update_template,
            delete_template_use_case: self.delete_template,
            fetch_shared_template_use_case: self.fetch_shared_template,
            oauth_provider: self.oauth_provider,
            oauth_login_use_case: self.oauth_login,
            guest_session_use_case: self.guest_session,
            fetch_profile_use_case: self.fetch_profile,
            github_insights_use_case: self.github_insights,
            wakatime_stats_use_case: self.wakatime_stats,
            blog_feed_use_case: self.blog_feed,
            frontend_url: self.frontend_url,
        })
    }
}
