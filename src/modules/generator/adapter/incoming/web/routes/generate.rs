use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::generator::application::domain::template::TemplateDocument;
use crate::generator::application::service::markdown::MarkdownGenerator;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct GenerateMarkdownResponse {
    /// The assembled README document
    pub markdown: String,
}

/// Render a template document to Markdown
///
/// Pure transformation; accepts anonymous and authenticated callers alike.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generate",
    responses(
        (status = 200, description = "Markdown generated", body = GenerateMarkdownResponse),
        (status = 400, description = "Malformed template document"),
    )
)]
#[post("/api/generate")]
pub async fn generate_markdown_handler(
    _user: MaybeUser,
    req: web::Json<TemplateDocument>,
) -> impl Responder {
    let template = req.into_inner();
    let markdown = MarkdownGenerator::new(&template).generate();

    ApiResponse::success(GenerateMarkdownResponse { markdown })
}
