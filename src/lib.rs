pub mod modules;
pub use modules::ai;
pub use modules::auth;
pub use modules::feed;
pub use modules::generator;
pub use modules::github;
pub use modules::template;
pub use modules::wakatime;

pub mod api;
pub mod automation;
pub mod health;
pub mod shared;

#[cfg(test)]
mod tests;

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
use crate::wakatime::application::use_cases::wakatime_stats::IWakaTimeStatsUseCase;

#[derive(Clone)]
pub struct AppState {
    // Generation
    pub create_preview_use_case: Arc<dyn ICreatePreviewUseCase + Send + Sync>,
    pub fetch_preview_use_case: Arc<dyn IFetchPreviewUseCase + Send + Sync>,
    // Templates
    pub create_template_use_case: Arc<dyn ICreateTemplateUseCase + Send + Sync>,
    pub fetch_user_templates_use_case: Arc<dyn IFetchUserTemplatesUseCase + Send + Sync>,
    pub fetch_template_use_case: Arc<dyn IFetchTemplateUseCase + Send + Sync>,
    pub update_template_use_case: Arc<dyn IUpdateTemplateUseCase + Send + Sync>,
    pub delete_template_use_case: Arc<dyn IDeleteTemplateUseCase + Send + Sync>,
    pub fetch_shared_template_use_case: Arc<dyn IFetchSharedTemplateUseCase + Send + Sync>,
    // Identity
    pub oauth_provider: Arc<dyn OAuthProvider + Send + Sync>,
    pub oauth_login_use_case: Arc<dyn IOAuthLoginUseCase + Send + Sync>,
    pub guest_session_use_case: Arc<dyn IGuestSessionUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    // Aggregators
    pub github_insights_use_case: Arc<dyn IGitHubInsightsUseCase + Send + Sync>,
    pub wakatime_stats_use_case: Arc<dyn IWakaTimeStatsUseCase + Send + Sync>,
    pub blog_feed_use_case: Arc<dyn IFetchBlogPostsUseCase + Send + Sync>,
    // Where browser redirects and share links land
    pub frontend_url: String,
}
