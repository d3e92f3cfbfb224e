use actix_web::{get, web, Responder};

use super::get_profile::upstream_error;
use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Accepts a bare username or a full profile URL.
#[get("/api/github/{username_or_url}/comprehensive")]
pub async fn get_github_comprehensive_handler(
    _user: MaybeUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username_or_url = path.into_inner();

    match data
        .github_insights_use_case
        .get_comprehensive_stats(&username_or_url)
        .await
    {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => upstream_error("fetching comprehensive stats", &username_or_url, e),
    }
}
