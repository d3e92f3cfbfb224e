use actix_web::{post, web, HttpResponse, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::generator::application::domain::template::TemplateDocument;
use crate::generator::application::service::markdown::MarkdownGenerator;

/// Download the rendered document as a README.md attachment
#[utoipa::path(
    post,
    path = "/api/generate/export",
    tag = "generate",
    responses(
        (status = 200, description = "Raw Markdown file", content_type = "text/markdown"),
    )
)]
#[post("/api/generate/export")]
pub async fn export_markdown_handler(
    _user: MaybeUser,
    req: web::Json<TemplateDocument>,
) -> impl Responder {
    let template = req.into_inner();
    let markdown = MarkdownGenerator::new(&template).generate();

    HttpResponse::Ok()
        .content_type("text/markdown")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"README.md\"",
        ))
        .body(markdown)
}
