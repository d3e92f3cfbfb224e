use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::feed::application::domain::entities::BlogSource;
use crate::feed::application::use_cases::fetch_blog_posts::{
    FetchBlogPostsError, DEFAULT_MAX_ITEMS,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseFeedRequest {
    pub source: Option<String>,
    pub username: Option<String>,
    pub custom_url: Option<String>,
    pub max_items: Option<usize>,
}

#[post("/api/rss/parse")]
pub async fn parse_feed_handler(
    _user: MaybeUser,
    req: web::Json<ParseFeedRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let source = match req.source.as_deref() {
        None | Some("") => {
            return ApiResponse::bad_request("SOURCE_REQUIRED", "Source is required");
        }
        Some(raw) => match BlogSource::parse(raw) {
            Some(source) => source,
            None => return ApiResponse::bad_request("INVALID_SOURCE", "Invalid blog source"),
        },
    };

    let max_items = req.max_items.unwrap_or(DEFAULT_MAX_ITEMS);

    match data
        .blog_feed_use_case
        .execute(
            source,
            req.username.as_deref(),
            req.custom_url.as_deref(),
            max_items,
        )
        .await
    {
        Ok(feed) => ApiResponse::success(feed),

        Err(e @ FetchBlogPostsError::MissingUsername)
        | Err(e @ FetchBlogPostsError::MissingCustomUrl) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(FetchBlogPostsError::FetchFailed(msg)) => {
            error!("RSS parse failed: {}", msg);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                &msg,
            )
        }
    }
}
