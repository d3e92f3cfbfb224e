use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::generator::application::domain::template::{
    Customization, Sections, TemplateDocument, Theme,
};
use crate::shared::api::ApiResponse;
use crate::template::application::domain::entities::{TemplateRecord, Visibility};
use crate::template::application::use_cases::create_template::{CreateTemplateError, NewTemplate};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sections: Sections,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub customization: Customization,
    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = Object)]
    pub sections: Sections,
    #[schema(value_type = Object)]
    pub theme: Theme,
    #[schema(value_type = Object)]
    pub customization: Customization,
    #[schema(value_type = String)]
    pub visibility: Visibility,
    pub share_id: Option<String>,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TemplateRecord> for TemplateResponse {
    fn from(record: TemplateRecord) -> Self {
        Self {
            id: record.id.to_string(),
            user_id: record.user_id.to_string(),
            name: record.name,
            description: record.description,
            sections: record.document.sections,
            theme: record.document.theme,
            customization: record.document.customization,
            visibility: record.visibility,
            share_id: record.share_id,
            views: record.views,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[post("/api/templates")]
pub async fn create_template_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateTemplateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if req.name.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Template name is required");
    }

    let template = NewTemplate {
        name: req.name,
        description: req.description,
        document: TemplateDocument {
            sections: req.sections,
            theme: req.theme,
            customization: req.customization,
        },
        visibility: req.visibility,
    };

    match data
        .create_template_use_case
        .execute(user.user_id, template)
        .await
    {
        Ok(record) => ApiResponse::created(TemplateResponse::from(record)),

        Err(CreateTemplateError::RepositoryError(e)) => {
            error!("Repository error creating template: {}", e);
            ApiResponse::internal_error()
        }
    }
}
