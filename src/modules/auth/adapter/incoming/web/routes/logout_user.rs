use actix_web::{post, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

/// Tokens are stateless; logout just acknowledges so clients can drop
/// their copy.
#[post("/api/auth/logout")]
pub async fn logout_user_handler(_user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(LogoutResponse {
        message: "Logged out successfully".to_string(),
    })
}
