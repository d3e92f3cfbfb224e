use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

/// Kicks off the OAuth dance by bouncing the browser to GitHub.
#[get("/api/auth/github")]
pub async fn github_login_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Found()
        .insert_header(("Location", data.oauth_provider.authorize_url()))
        .finish()
}
