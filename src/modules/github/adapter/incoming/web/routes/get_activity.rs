use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};

use super::get_profile::upstream_error;
use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::github::application::domain::entities::ActivityEvent;
use crate::shared::api::ApiResponse;
use crate::AppState;

const DEFAULT_ACTIVITY_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<u32>,
}

#[derive(Serialize)]
pub struct ActivityListResponse {
    pub count: usize,
    pub events: Vec<ActivityEvent>,
}

#[get("/api/github/{username}/activity")]
pub async fn get_github_activity_handler(
    _user: MaybeUser,
    path: web::Path<String>,
    query: web::Query<ActivityQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);

    match data
        .github_insights_use_case
        .get_activity(&username, limit)
        .await
    {
        Ok(events) => ApiResponse::success(ActivityListResponse {
            count: events.len(),
            events,
        }),
        Err(e) => upstream_error("fetching activity", &username, e),
    }
}
