use actix_web::{get, web, Responder};
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
pub struct PostsQuery {
    pub limit: Option<usize>,
}

/// Conventional per-platform feeds: devto, medium, hashnode.
#[get("/api/rss/{source}/{username}")]
pub async fn get_source_posts_handler(
    _user: MaybeUser,
    path: web::Path<(String, String)>,
    query: web::Query<PostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (raw_source, username) = path.into_inner();

    let source = match BlogSource::parse(&raw_source) {
        Some(BlogSource::Custom) | None => {
            return ApiResponse::bad_request("INVALID_SOURCE", "Invalid blog source");
        }
        Some(source) => source,
    };

    let max_items = query.limit.unwrap_or(DEFAULT_MAX_ITEMS);

    match data
        .blog_feed_use_case
        .execute(source, Some(&username), None, max_items)
        .await
    {
        Ok(feed) => ApiResponse::success(feed),

        Err(e @ FetchBlogPostsError::MissingUsername)
        | Err(e @ FetchBlogPostsError::MissingCustomUrl) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(FetchBlogPostsError::FetchFailed(msg)) => {
            error!("Error fetching {} posts for {}: {}", raw_source, username, msg);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                &msg,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubFetchBlogPostsUseCase;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_devto_posts() {
        let app_state = TestAppStateBuilder::default()
            .with_blog_feed(StubFetchBlogPostsUseCase::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_source_posts_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/rss/devto/ada?limit=3")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Stub Feed");
    }

    #[actix_web::test]
    async fn test_unknown_source_is_400() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_source_posts_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/rss/geocities/ada")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_custom_source_is_rejected_here() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_source_posts_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/rss/custom/ada")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
