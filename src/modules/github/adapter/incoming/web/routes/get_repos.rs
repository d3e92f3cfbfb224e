use actix_web::{get, web, Responder};
use serde::Serialize;

use super::get_profile::upstream_error;
use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::github::application::domain::entities::RepoSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct RepoListResponse {
    pub count: usize,
    pub repos: Vec<RepoSummary>,
}

#[get("/api/github/{username}/repos")]
pub async fn get_github_repos_handler(
    _user: MaybeUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.github_insights_use_case.get_repos(&username).await {
        Ok(repos) => ApiResponse::success(RepoListResponse {
            count: repos.len(),
            repos,
        }),
        Err(e) => upstream_error("fetching repositories", &username, e),
    }
}
