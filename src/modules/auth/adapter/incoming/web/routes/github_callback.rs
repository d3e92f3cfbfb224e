use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// OAuth callback: trades the code for a bearer token and bounces the
/// browser back to the frontend with it. Every failure path lands on
/// the login page with a generic error flag.
#[get("/api/auth/github/callback")]
pub async fn github_callback_handler(
    query: web::Query<CallbackQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let code = match (query.code, query.error) {
        (Some(code), None) => code,
        (_, provider_error) => {
            if let Some(e) = provider_error {
                error!("GitHub OAuth provider returned error: {}", e);
            }
            return login_error_redirect(&data.frontend_url);
        }
    };

    match data.oauth_login_use_case.execute(&code).await {
        Ok(result) => HttpResponse::Found()
            .insert_header((
                "Location",
                format!("{}/auth/callback?token={}", data.frontend_url, result.token),
            ))
            .finish(),
        Err(e) => {
            error!("OAuth login failed: {:?}", e);
            login_error_redirect(&data.frontend_url)
        }
    }
}

fn login_error_redirect(frontend_url: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", format!("{}/login?error=auth_failed", frontend_url)))
        .finish()
}
