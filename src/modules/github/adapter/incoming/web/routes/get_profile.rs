use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::github::application::use_cases::github_insights::GitHubInsightsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/github/{username}")]
pub async fn get_github_profile_handler(
    _user: MaybeUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.github_insights_use_case.get_profile(&username).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => upstream_error("fetching GitHub profile", &username, e),
    }
}

pub(super) fn upstream_error(
    action: &str,
    subject: &str,
    err: GitHubInsightsError,
) -> actix_web::HttpResponse {
    error!("Error {} for {}: {}", action, subject, err);
    ApiResponse::error(
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        "UPSTREAM_ERROR",
        &err.to_string(),
    )
}
