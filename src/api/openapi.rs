use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Generator
use crate::generator::adapter::incoming::web::routes::{
    CreatePreviewResponse, GenerateMarkdownResponse, PreviewResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "README Forge API",
        version = "1.0.0",
        description = "API documentation for the profile README generator",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Generator endpoints
        crate::generator::adapter::incoming::web::routes::generate_markdown_handler,
        crate::generator::adapter::incoming::web::routes::create_preview_handler,
        crate::generator::adapter::incoming::web::routes::get_preview_handler,
        crate::generator::adapter::incoming::web::routes::export_markdown_handler,

        // Template endpoints
        // create_template_handler,
        // get_user_templates_handler,
        // get_template_handler,
        // update_template_handler,
        // delete_template_handler,
        // get_shared_template_handler,

        // Auth endpoints
        // github_login_handler,
        // github_callback_handler,
        // fetch_user_handler,
        // guest_session_handler,
        // logout_user_handler,

        // Aggregation endpoints
        // get_github_profile_handler,
        // get_github_repos_handler,
        // get_github_activity_handler,
        // get_github_comprehensive_handler,
        // get_user_stats_handler,
        // get_wakatime_stats_handler,
        // get_wakatime_all_time_handler,
        // parse_feed_handler,
        // get_source_posts_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<GenerateMarkdownResponse>,
            ErrorResponse,
            ErrorDetail,

            // Generator DTOs
            GenerateMarkdownResponse,
            CreatePreviewResponse,
            PreviewResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "generate", description = "Markdown generation endpoints"),
        (name = "templates", description = "Template management endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "github", description = "GitHub aggregation endpoints"),
        (name = "stats", description = "External stats endpoints"),
        (name = "rss", description = "Blog feed endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
