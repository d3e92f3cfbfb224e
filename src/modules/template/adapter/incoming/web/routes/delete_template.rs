use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::template::application::use_cases::delete_template::DeleteTemplateError;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteTemplateResponse {
    pub message: String,
}

#[delete("/api/templates/{template_id}")]
pub async fn delete_template_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let template_id = path.into_inner();

    match data
        .delete_template_use_case
        .execute(user.user_id, template_id)
        .await
    {
        Ok(()) => ApiResponse::success(DeleteTemplateResponse {
            message: "Template deleted successfully".to_string(),
        }),

        Err(DeleteTemplateError::TemplateNotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(DeleteTemplateError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Unauthorized access")
        }

        Err(DeleteTemplateError::RepositoryError(e)) => {
            error!("Repository error deleting template {}: {}", template_id, e);
            ApiResponse::internal_error()
        }
    }
}
