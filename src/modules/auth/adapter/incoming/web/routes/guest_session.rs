use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestSessionResponse {
    /// Bearer token for the guest session (24-hour expiry)
    pub token: String,
    pub user: GuestUserInfo,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestUserInfo {
    pub id: String,
    pub name: String,
    pub is_guest: bool,
}

#[post("/api/auth/guest")]
pub async fn guest_session_handler(data: web::Data<AppState>) -> impl Responder {
    match data.guest_session_use_case.execute().await {
        Ok(session) => ApiResponse::success(GuestSessionResponse {
            token: session.token,
            user: GuestUserInfo {
                id: session.user.id.to_string(),
                name: session.user.name,
                is_guest: session.user.is_guest,
            },
        }),

        // Best-effort single write: nothing to roll back, just report.
        Err(e) => {
            error!("Guest session creation failed: {:?}", e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "GUEST_SESSION_FAILED",
                "Failed to create guest session",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::guest_session::{
        GuestSession, GuestSessionError, IGuestSessionUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::sample_guest_user;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    struct MockGuestSessionUseCase {
        result: Result<String, GuestSessionError>,
    }

    #[async_trait]
    impl IGuestSessionUseCase for MockGuestSessionUseCase {
        async fn execute(&self) -> Result<GuestSession, GuestSessionError> {
            self.result.clone().map(|token| GuestSession {
                token,
                user: sample_guest_user(Uuid::new_v4()),
            })
        }
    }

    #[actix_web::test]
    async fn test_guest_session_success() {
        let app_state = TestAppStateBuilder::default()
            .with_guest_session(MockGuestSessionUseCase {
                result: Ok("guest-jwt".to_string()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(guest_session_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/auth/guest").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token"], "guest-jwt");
        assert_eq!(body["data"]["user"]["isGuest"], true);
    }

    #[actix_web::test]
    async fn test_guest_session_failure_is_generic() {
        let app_state = TestAppStateBuilder::default()
            .with_guest_session(MockGuestSessionUseCase {
                result: Err(GuestSessionError::RepositoryError("db down".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(guest_session_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/auth/guest").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "GUEST_SESSION_FAILED");
    }
}
