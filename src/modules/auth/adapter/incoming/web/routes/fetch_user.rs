use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    /// User ID (UUID)
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub github_id: Option<i64>,
    pub is_guest: bool,
}

#[get("/api/auth/user")]
pub async fn fetch_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse {
            id: profile.id.to_string(),
            name: profile.name,
            email: profile.email,
            username: profile.username,
            avatar_url: profile.avatar_url,
            bio: profile.bio,
            location: profile.location,
            website: profile.website,
            github_id: profile.github_id,
            is_guest: profile.is_guest,
        }),

        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::RepositoryError(e)) => {
            error!("Repository error fetching profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
