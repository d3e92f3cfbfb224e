use actix_web::{get, web, Responder};
use tracing::error;

use super::create_template::TemplateResponse;
use crate::shared::api::ApiResponse;
use crate::template::application::use_cases::fetch_shared_template::FetchSharedTemplateError;
use crate::AppState;

/// Public share-link resolution; no authentication, counts a view.
#[get("/api/templates/share/{share_id}")]
pub async fn get_shared_template_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let share_id = path.into_inner();

    match data
        .fetch_shared_template_use_case
        .execute(&share_id)
        .await
    {
        Ok(record) => ApiResponse::success(TemplateResponse::from(record)),

        Err(FetchSharedTemplateError::TemplateNotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(FetchSharedTemplateError::TemplateIsPrivate) => {
            ApiResponse::forbidden("TEMPLATE_PRIVATE", "This template is private")
        }

        Err(FetchSharedTemplateError::RepositoryError(e)) => {
            error!(
                "Repository error fetching shared template {}: {}",
                share_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
