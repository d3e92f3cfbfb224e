use actix_web::{get, web, Responder};

use super::get_profile::upstream_error;
use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Lighter single-page aggregation under the stats namespace.
#[get("/api/stats/{username}")]
pub async fn get_user_stats_handler(
    _user: MaybeUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.github_insights_use_case.get_user_stats(&username).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => upstream_error("fetching user stats", &username, e),
    }
}
