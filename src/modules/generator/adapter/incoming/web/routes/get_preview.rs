use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::generator::application::use_cases::fetch_preview::FetchPreviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub content: String,
    /// Reads so far, this one included
    pub views: i32,
    pub created_at: DateTime<Utc>,
}

/// Read a shared preview; each read counts a view
#[utoipa::path(
    get,
    path = "/api/generate/preview/{share_id}",
    tag = "generate",
    responses(
        (status = 200, description = "Preview content", body = PreviewResponse),
        (status = 404, description = "Unknown or expired share id"),
    )
)]
#[get("/api/generate/preview/{share_id}")]
pub async fn get_preview_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let share_id = path.into_inner();

    match data.fetch_preview_use_case.execute(&share_id).await {
        Ok(preview) => ApiResponse::success(PreviewResponse {
            content: preview.content,
            views: preview.views,
            created_at: preview.created_at,
        }),

        Err(FetchPreviewError::PreviewNotFound) => {
            ApiResponse::not_found("PREVIEW_NOT_FOUND", "Preview not found")
        }

        Err(FetchPreviewError::RepositoryError(e)) => {
            error!("Repository error fetching preview {}: {}", share_id, e);
            ApiResponse::internal_error()
        }
    }
}
