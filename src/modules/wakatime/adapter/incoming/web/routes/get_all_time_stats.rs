use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/stats/wakatime/{username}/all-time")]
pub async fn get_wakatime_all_time_handler(
    _user: MaybeUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data
        .wakatime_stats_use_case
        .get_all_time_stats(&username)
        .await
    {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!(
                "Error fetching all-time WakaTime stats for {}: {}",
                username, e
            );
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                &e.to_string(),
            )
        }
    }
}
