use readme_forge::auth::adapter::outgoing::github_oauth_reqwest::{
    GitHubOAuthClient, GitHubOAuthConfig,
};
use readme_forge::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use readme_forge::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use readme_forge::auth::application::ports::outgoing::oauth_provider::OAuthProvider;
use readme_forge::auth::application::ports::outgoing::token_provider::TokenProvider;
use readme_forge::auth::application::use_cases::{
    fetch_profile::FetchProfileUseCase, guest_session::GuestSessionUseCase,
    oauth_login::OAuthLoginUseCase,
};

use readme_forge::feed::adapter::outgoing::feed_fetcher_reqwest::FeedFetcherReqwest;
use readme_forge::feed::application::use_cases::fetch_blog_posts::FetchBlogPostsUseCase;

use readme_forge::generator::adapter::outgoing::preview_repository_postgres::PreviewRepositoryPostgres;
use readme_forge::generator::application::use_cases::{
    create_preview::CreatePreviewUseCase, fetch_preview::FetchPreviewUseCase,
};

use readme_forge::github::adapter::outgoing::github_gateway_reqwest::GitHubGatewayReqwest;
use readme_forge::github::application::use_cases::github_insights::GitHubInsightsService;

use readme_forge::template::adapter::outgoing::template_repository_postgres::TemplateRepositoryPostgres;
use readme_forge::template::application::use_cases::{
    create_template::CreateTemplateUseCase, delete_template::DeleteTemplateUseCase,
    fetch_shared_template::FetchSharedTemplateUseCase, fetch_template::FetchTemplateUseCase,
    fetch_user_templates::FetchUserTemplatesUseCase, update_template::UpdateTemplateUseCase,
};

use readme_forge::wakatime::adapter::outgoing::wakatime_gateway_reqwest::{
    WakaTimeConfig, WakaTimeGatewayReqwest,
};
use readme_forge::wakatime::application::use_cases::wakatime_stats::WakaTimeStatsService;

use readme_forge::shared::api::json_config::custom_json_config;
use readme_forge::AppState;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let environment = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Preview pipeline
    let preview_repo = PreviewRepositoryPostgres::new(Arc::clone(&db_arc));
    let create_preview_use_case = CreatePreviewUseCase::new(preview_repo.clone());
    let fetch_preview_use_case = FetchPreviewUseCase::new(preview_repo);

    // Template CRUD
    let template_repo = TemplateRepositoryPostgres::new(Arc::clone(&db_arc));
    let create_template_use_case = CreateTemplateUseCase::new(template_repo.clone());
    let fetch_user_templates_use_case = FetchUserTemplatesUseCase::new(template_repo.clone());
    let fetch_template_use_case = FetchTemplateUseCase::new(template_repo.clone());
    let update_template_use_case = UpdateTemplateUseCase::new(template_repo.clone());
    let delete_template_use_case = DeleteTemplateUseCase::new(template_repo.clone());
    let fetch_shared_template_use_case = FetchSharedTemplateUseCase::new(template_repo);

    // Identity
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let oauth_client = GitHubOAuthClient::new(GitHubOAuthConfig::from_env());
    let oauth_provider_arc: Arc<dyn OAuthProvider + Send + Sync> = Arc::new(oauth_client.clone());

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let oauth_login_use_case = OAuthLoginUseCase::new(
        oauth_client,
        user_repo.clone(),
        Arc::clone(&token_provider_arc),
    );
    let guest_session_use_case =
        GuestSessionUseCase::new(user_repo.clone(), Arc::clone(&token_provider_arc));
    let fetch_profile_use_case = FetchProfileUseCase::new(user_repo);

    // External aggregators
    let github_insights_use_case = GitHubInsightsService::new(GitHubGatewayReqwest::new());
    let wakatime_stats_use_case =
        WakaTimeStatsService::new(WakaTimeGatewayReqwest::new(WakaTimeConfig::from_env()));
    let blog_feed_use_case = FetchBlogPostsUseCase::new(FeedFetcherReqwest::new());

    let state = AppState {
        create_preview_use_case: Arc::new(create_preview_use_case),
        fetch_preview_use_case: Arc::new(fetch_preview_use_case),
        create_template_use_case: Arc::new(create_template_use_case),
        fetch_user_templates_use_case: Arc::new(fetch_user_templates_use_case),
        fetch_template_use_case: Arc::new(fetch_template_use_case),
        update_template_use_case: Arc::new(update_template_use_case),
        delete_template_use_case: Arc::new(delete_template_use_case),
        fetch_shared_template_use_case: Arc::new(fetch_shared_template_use_case),
        oauth_provider: oauth_provider_arc,
        oauth_login_use_case: Arc::new(oauth_login_use_case),
        guest_session_use_case: Arc::new(guest_session_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        github_insights_use_case: Arc::new(github_insights_use_case),
        wakatime_stats_use_case: Arc::new(wakatime_stats_use_case),
        blog_feed_use_case: Arc::new(blog_feed_use_case),
        frontend_url,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url(
                    "/api-docs/openapi.json",
                    readme_forge::api::openapi::ApiDoc::openapi(),
                ),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(readme_forge::health::health);
    cfg.service(readme_forge::health::readiness);
    // Generation
    cfg.service(readme_forge::generator::adapter::incoming::web::routes::generate_markdown_handler);
    cfg.service(readme_forge::generator::adapter::incoming::web::routes::create_preview_handler);
    cfg.service(readme_forge::generator::adapter::incoming::web::routes::get_preview_handler);
    cfg.service(readme_forge::generator::adapter::incoming::web::routes::export_markdown_handler);
    // Templates ("/user" and "/share" must win over "/{template_id}")
    cfg.service(readme_forge::template::adapter::incoming::web::routes::get_user_templates_handler);
    cfg.service(readme_forge::template::adapter::incoming::web::routes::get_shared_template_handler);
    cfg.service(readme_forge::template::adapter::incoming::web::routes::create_template_handler);
    cfg.service(readme_forge::template::adapter::incoming::web::routes::get_template_handler);
    cfg.service(readme_forge::template::adapter::incoming::web::routes::update_template_handler);
    cfg.service(readme_forge::template::adapter::incoming::web::routes::delete_template_handler);
    // Auth
    cfg.service(readme_forge::auth::adapter::incoming::web::routes::github_login_handler);
    cfg.service(readme_forge::auth::adapter::incoming::web::routes::github_callback_handler);
    cfg.service(readme_forge::auth::adapter::incoming::web::routes::fetch_user_handler);
    cfg.service(readme_forge::auth::adapter::incoming::web::routes::guest_session_handler);
    cfg.service(readme_forge::auth::adapter::incoming::web::routes::logout_user_handler);
    // GitHub aggregation
    cfg.service(readme_forge::github::adapter::incoming::web::routes::get_github_repos_handler);
    cfg.service(readme_forge::github::adapter::incoming::web::routes::get_github_activity_handler);
    cfg.service(
        readme_forge::github::adapter::incoming::web::routes::get_github_comprehensive_handler,
    );
    cfg.service(readme_forge::github::adapter::incoming::web::routes::get_github_profile_handler);
    // Stats
    cfg.service(readme_forge::wakatime::adapter::incoming::web::routes::get_wakatime_stats_handler);
    cfg.service(
        readme_forge::wakatime::adapter::incoming::web::routes::get_wakatime_all_time_handler,
    );
    cfg.service(readme_forge::github::adapter::incoming::web::routes::get_user_stats_handler);
    // RSS
    cfg.service(readme_forge::feed::adapter::incoming::web::routes::parse_feed_handler);
    cfg.service(readme_forge::feed::adapter::incoming::web::routes::get_source_posts_handler);
    // AI placeholders
    cfg.service(readme_forge::ai::adapter::incoming::web::routes::enhance_handler);
    cfg.service(readme_forge::ai::adapter::incoming::web::routes::suggest_projects_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
