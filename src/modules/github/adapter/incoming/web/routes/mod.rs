mod get_activity;
mod get_comprehensive;
mod get_profile;
mod get_repos;
mod get_user_stats;

pub use get_activity::{get_github_activity_handler, ActivityListResponse};
pub use get_comprehensive::get_github_comprehensive_handler;
pub use get_profile::get_github_profile_handler;
pub use get_repos::{get_github_repos_handler, RepoListResponse};
pub use get_user_stats::get_user_stats_handler;
