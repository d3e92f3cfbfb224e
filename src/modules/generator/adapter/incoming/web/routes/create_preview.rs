use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::generator::application::domain::template::TemplateDocument;
use crate::generator::application::service::markdown::MarkdownGenerator;
use crate::generator::application::use_cases::create_preview::CreatePreviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePreviewRequest {
    /// Saved-template id, when previewing a stored template.
    #[serde(rename = "_id", default)]
    pub template_id: Option<Uuid>,
    #[serde(flatten)]
    pub template: TemplateDocument,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePreviewResponse {
    /// Opaque token identifying the preview
    pub share_id: String,
    /// Frontend URL serving the preview
    pub url: String,
}

/// Create a shareable preview snapshot (30-day TTL)
#[utoipa::path(
    post,
    path = "/api/generate/preview",
    tag = "generate",
    responses(
        (status = 200, description = "Preview created", body = CreatePreviewResponse),
        (status = 500, description = "Preview could not be persisted"),
    )
)]
#[post("/api/generate/preview")]
pub async fn create_preview_handler(
    _user: MaybeUser,
    req: web::Json<CreatePreviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let markdown = MarkdownGenerator::new(&req.template).generate();

    match data
        .create_preview_use_case
        .execute(req.template_id, markdown)
        .await
    {
        Ok(created) => {
            let url = format!("{}/preview/{}", data.frontend_url, created.share_id);
            ApiResponse::success(CreatePreviewResponse {
                share_id: created.share_id,
                url,
            })
        }

        Err(CreatePreviewError::RepositoryError(e)) => {
            error!("Repository error creating preview: {}", e);
            ApiResponse::internal_error()
        }
    }
}
